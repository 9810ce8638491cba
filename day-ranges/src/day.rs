//! Day-granularity comparisons between dates.
//!
//! Every helper in this module first truncates its inputs to a calendar day
//! through [`CalendarDay`], so that the time of day never influences the
//! result.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// A value that can be truncated to the calendar day it belongs to.
///
/// ```
/// use chrono::{NaiveDate, Utc, TimeZone};
/// use day_ranges::CalendarDay;
///
/// let date = NaiveDate::from_ymd_opt(2019, 12, 18).unwrap();
/// let datetime = Utc.with_ymd_and_hms(2019, 12, 18, 23, 59, 0).unwrap();
///
/// assert_eq!(date.calendar_day(), date);
/// assert_eq!(datetime.calendar_day(), date);
/// ```
pub trait CalendarDay {
    /// Get the calendar day, as seen from the value's own time zone if it
    /// has one.
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Check if two dates fall on the same calendar day.
pub fn same_day(a: impl CalendarDay, b: impl CalendarDay) -> bool {
    a.calendar_day() == b.calendar_day()
}

/// Count the number of calendar days from `a` to `b`, which is negative if
/// `b` comes first.
///
/// ```
/// use chrono::NaiveDate;
/// use day_ranges::day::days_between;
///
/// let a = NaiveDate::from_ymd_opt(2019, 12, 28).unwrap();
/// let b = NaiveDate::from_ymd_opt(2020, 1, 3).unwrap();
///
/// assert_eq!(days_between(a, b), 6);
/// assert_eq!(days_between(b, a), -6);
/// ```
pub fn days_between(a: impl CalendarDay, b: impl CalendarDay) -> i64 {
    (b.calendar_day() - a.calendar_day()).num_days()
}

/// Check if `b` is exactly the calendar day following `a`.
pub fn is_next_day(a: impl CalendarDay, b: impl CalendarDay) -> bool {
    days_between(a, b) == 1
}

/// Check if two dates belong to the same ISO week of the same ISO year.
pub fn same_iso_week(a: impl CalendarDay, b: impl CalendarDay) -> bool {
    a.calendar_day().iso_week() == b.calendar_day().iso_week()
}
