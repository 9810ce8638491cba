use std::fmt;

use chrono::{Datelike, NaiveDate};
use day_set::DaySet;

use crate::day::{days_between, is_next_day, CalendarDay};

// DateInterval

/// An inclusive range of calendar days, which always starts before it ends.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Build an interval from its first and last day, return `None` if `end`
    /// comes before `start`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_ranges::DateInterval;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2019, 12, 16).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2019, 12, 20).unwrap();
    ///
    /// assert!(DateInterval::new(day1, day2).is_some());
    /// assert!(DateInterval::new(day2, day1).is_none());
    /// ```
    pub fn new(start: impl CalendarDay, end: impl CalendarDay) -> Option<Self> {
        let start = start.calendar_day();
        let end = end.calendar_day();
        (start <= end).then_some(Self { start, end })
    }

    /// Build an interval covering a single day.
    pub fn single(day: impl CalendarDay) -> Self {
        let day = day.calendar_day();
        Self { start: day, end: day }
    }

    /// First day of the interval.
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the interval, included.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a day is covered by this interval.
    pub fn contains(&self, day: impl CalendarDay) -> bool {
        (self.start..=self.end).contains(&day.calendar_day())
    }

    /// Number of days covered by this interval, which is at least 1.
    pub fn len_days(&self) -> u64 {
        days_between(self.start, self.end).unsigned_abs() + 1
    }

    /// Iterate over all the days covered by this interval.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_ranges::DateInterval;
    ///
    /// let start = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    /// let interval = DateInterval::new(start, end).unwrap();
    ///
    /// assert_eq!(interval.days().count(), 3);
    /// assert_eq!(interval.days().last(), Some(end));
    /// ```
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            (*day < end).then(|| day.succ_opt()).flatten()
        })
    }

    /// Check if the interval covers a single day.
    #[inline]
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Check if the interval starts and ends in different years.
    #[inline]
    pub fn crosses_year(&self) -> bool {
        self.start.year() != self.end.year()
    }

    /// Check if the interval starts and ends in different months, which
    /// includes months of different years.
    #[inline]
    pub fn crosses_month(&self) -> bool {
        self.crosses_year() || self.start.month() != self.end.month()
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

// Compaction

/// Group a sequence of days into a minimal list of intervals of consecutive
/// days, after removing the days that are `excluded`.
///
/// The output is sorted, its intervals don't overlap and two successive
/// intervals are always separated by at least one day. Input values are
/// truncated to their calendar day, so the time of day is ignored.
///
/// Days are expected in increasing order. Unsorted input is sorted and
/// duplicate days are merged.
///
/// ```
/// use chrono::NaiveDate;
/// use day_ranges::{compact_to_intervals, DateInterval};
///
/// let day = |d| NaiveDate::from_ymd_opt(2019, 12, d).unwrap();
/// let intervals = compact_to_intervals((16..=20).map(day), [day(18)]);
///
/// assert_eq!(
///     intervals,
///     [
///         DateInterval::new(day(16), day(17)).unwrap(),
///         DateInterval::new(day(19), day(20)).unwrap(),
///     ],
/// );
/// ```
pub fn compact_to_intervals<D: CalendarDay>(
    all: impl IntoIterator<Item = D>,
    excluded: impl IntoIterator<Item = D>,
) -> Vec<DateInterval> {
    let days: Vec<_> = all.into_iter().map(|day| day.calendar_day()).collect();

    if !days.windows(2).all(|pair| pair[0] <= pair[1]) {
        #[cfg(feature = "log")]
        log::warn!("Dates were not given in increasing order, they will be sorted");
    }

    let excluded: DaySet = excluded.into_iter().map(|day| day.calendar_day()).collect();
    let effective = DaySet::from(days).difference(&excluded);
    let mut intervals: Vec<DateInterval> = Vec::new();

    for day in effective {
        match intervals.last_mut() {
            Some(last) if is_next_day(last.end, day) => last.end = day,
            _ => intervals.push(DateInterval::single(day)),
        }
    }

    intervals
}

/// List all days covered by a list of intervals, in order.
///
/// ```
/// use chrono::NaiveDate;
/// use day_ranges::{compact_to_intervals, expand_intervals};
///
/// let days: Vec<_> = [1, 2, 3, 7, 8]
///     .into_iter()
///     .map(|d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap())
///     .collect();
///
/// let intervals = compact_to_intervals(&days, []);
/// assert_eq!(expand_intervals(&intervals), days);
/// ```
pub fn expand_intervals(intervals: &[DateInterval]) -> Vec<NaiveDate> {
    intervals.iter().flat_map(DateInterval::days).collect()
}
