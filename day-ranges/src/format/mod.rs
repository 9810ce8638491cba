//! Render lists of [`DateInterval`] as human-readable text.
//!
//! Two styles are supported:
//!  - the long form, eg. "December 16-17,19-20,23, 2019"
//!  - the short form with days of the week, eg. "Mon-Fri, Dec 16-20"

mod names;

use chrono::{Datelike, NaiveDate};

use crate::day::{same_iso_week, CalendarDay};
use crate::interval::{compact_to_intervals, DateInterval};

pub use names::{DateNames, English, MonthFormat};

// --
// -- RangeFormatter
// --

/// Options for rendering intervals, along with the provider of month and
/// weekday labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RangeFormatter<N = English> {
    pub names: N,
    pub month_format: MonthFormat,
    pub include_year: bool,
}

impl Default for RangeFormatter {
    fn default() -> Self {
        Self { names: English, month_format: MonthFormat::Full, include_year: true }
    }
}

impl RangeFormatter {
    /// Formatter using English full month names, with years displayed.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: DateNames> RangeFormatter<N> {
    /// Change how month names are rendered in the long form.
    pub fn with_month_format(self, month_format: MonthFormat) -> Self {
        Self { month_format, ..self }
    }

    /// Choose if years are displayed in the long form. Without years, an
    /// interval starting in the same month of another year still gets its
    /// month label, eg. "December 18, December 18".
    pub fn with_year(self, include_year: bool) -> Self {
        Self { include_year, ..self }
    }

    /// Use another provider for month and weekday labels.
    pub fn with_names<N2: DateNames>(self, names: N2) -> RangeFormatter<N2> {
        RangeFormatter {
            names,
            month_format: self.month_format,
            include_year: self.include_year,
        }
    }

    /// Render intervals in long form, return `None` if there is no interval.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_ranges::{DateInterval, RangeFormatter};
    ///
    /// let start = NaiveDate::from_ymd_opt(2019, 12, 23).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
    /// let interval = DateInterval::new(start, end).unwrap();
    ///
    /// assert_eq!(
    ///     RangeFormatter::new().format(&[interval]).as_deref(),
    ///     Some("December 23, 2019 - January 6, 2020"),
    /// );
    ///
    /// assert_eq!(RangeFormatter::new().format(&[]), None);
    /// ```
    pub fn format(&self, intervals: &[DateInterval]) -> Option<String> {
        let style = Style {
            month_format: self.month_format,
            include_year: self.include_year,
            weekdays: false,
        };

        self.render(intervals, style)
    }

    /// Render intervals in short form, with abbreviated month names and no
    /// year. When there is a single interval that doesn't span several
    /// weeks, it is prefixed with the days of the week it covers.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_ranges::{DateInterval, RangeFormatter};
    ///
    /// let start = NaiveDate::from_ymd_opt(2019, 12, 16).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2019, 12, 20).unwrap();
    /// let interval = DateInterval::new(start, end).unwrap();
    ///
    /// assert_eq!(
    ///     RangeFormatter::new().format_with_weekday(&[interval]).as_deref(),
    ///     Some("Mon-Fri, Dec 16-20"),
    /// );
    /// ```
    pub fn format_with_weekday(&self, intervals: &[DateInterval]) -> Option<String> {
        let style = Style {
            month_format: MonthFormat::Short,
            include_year: false,
            weekdays: true,
        };

        self.render(intervals, style)
    }

    fn render(&self, intervals: &[DateInterval], style: Style) -> Option<String> {
        let first = intervals.first()?;
        let init = Cursor::new(first, intervals.len(), style, &self.names);

        let cursor = intervals
            .iter()
            .fold(init, |cursor, interval| cursor.step(interval, style, &self.names));

        Some(cursor.finish(style))
    }
}

// --
// -- Traversal
// --

/// Layout of the rendered text shared by all intervals of a list.
#[derive(Clone, Copy, Debug)]
struct Style {
    month_format: MonthFormat,
    include_year: bool,
    weekdays: bool,
}

impl Style {
    /// Written after each group of days.
    fn separator(self) -> &'static str {
        if self.weekdays {
            ", "
        } else {
            ","
        }
    }

    /// Written before a month label that follows a group of days.
    fn month_gap(self) -> &'static str {
        if self.weekdays {
            ""
        } else {
            " "
        }
    }
}

/// How an interval relates to month and year boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Boundary {
    /// Starts and ends in different years, which are displayed.
    Year,
    /// Starts and ends in different months.
    Month,
    SingleDay,
    SameMonth,
}

impl Boundary {
    fn of(interval: &DateInterval, include_year: bool) -> Self {
        if include_year && interval.crosses_year() {
            Self::Year
        } else if interval.crosses_month() {
            Self::Month
        } else if interval.is_single_day() {
            Self::SingleDay
        } else {
            Self::SameMonth
        }
    }
}

/// State carried from one interval to the next.
#[derive(Debug)]
struct Cursor {
    year: i32,
    month: u32,
    dates: String,
    weekdays: String,
    show_weekdays: bool,
}

impl Cursor {
    fn new(first: &DateInterval, count: usize, style: Style, names: &impl DateNames) -> Self {
        let start = first.start();

        Self {
            year: start.year(),
            month: start.month(),
            dates: format!("{} ", names.month(start, style.month_format)),
            weekdays: String::new(),
            show_weekdays: count == 1,
        }
    }

    fn step(self, interval: &DateInterval, style: Style, names: &impl DateNames) -> Self {
        let Self { mut year, mut month, mut dates, mut weekdays, mut show_weekdays } = self;
        let (start, end) = (interval.start(), interval.end());
        let sep = style.separator();
        let month_name = |date: NaiveDate| names.month(date, style.month_format);

        if style.include_year && start.year() != year {
            dates.push_str(&format!(" {year} - {} ", month_name(start)));
            (year, month) = (start.year(), start.month());
        } else if (start.year(), start.month()) != (year, month) {
            dates.push_str(&format!("{}{} ", style.month_gap(), month_name(start)));
            (year, month) = (start.year(), start.month());
        }

        let boundary = Boundary::of(interval, style.include_year);
        let (sd, ed) = (start.day(), end.day());

        match boundary {
            Boundary::Year => {
                let start_year = start.year();
                dates.push_str(&format!("{sd}, {start_year} - {} {ed}{sep}", month_name(end)));
                (year, month) = (end.year(), end.month());
            }
            Boundary::Month => {
                dates.push_str(&format!("{sd} - {} {ed}{sep}", month_name(end)));
                (year, month) = (end.year(), end.month());
            }
            Boundary::SingleDay => dates.push_str(&format!("{sd}{sep}")),
            Boundary::SameMonth => dates.push_str(&format!("{sd}-{ed}{sep}")),
        }

        if style.weekdays {
            let (sw, ew) = (names.weekday(start), names.weekday(end));

            match boundary {
                Boundary::Year | Boundary::Month => weekdays.push_str(&format!("{sw} - {ew}, ")),
                Boundary::SingleDay => weekdays.push_str(&format!("{sw}, ")),
                Boundary::SameMonth => weekdays.push_str(&format!("{sw}-{ew}, ")),
            }

            show_weekdays = show_weekdays && same_iso_week(start, end);
        }

        Self { year, month, dates, weekdays, show_weekdays }
    }

    fn finish(self, style: Style) -> String {
        let Self { year, mut dates, weekdays, show_weekdays, .. } = self;

        if style.include_year {
            dates.push_str(&format!(" {year}"));
        }

        if let Some(len) = dates.strip_suffix(style.separator()).map(str::len) {
            dates.truncate(len);
        }

        if style.weekdays && show_weekdays {
            weekdays + &dates
        } else {
            dates
        }
    }
}

// --
// -- Shorthands
// --

/// Render intervals in long form with English labels.
///
/// ```
/// use chrono::NaiveDate;
/// use day_ranges::{compact_to_intervals, format_intervals, MonthFormat};
///
/// let days = [16, 17, 19, 20, 23].map(|d| NaiveDate::from_ymd_opt(2019, 12, d).unwrap());
/// let intervals = compact_to_intervals(days, []);
///
/// assert_eq!(
///     format_intervals(&intervals, MonthFormat::Full, true).as_deref(),
///     Some("December 16-17,19-20,23, 2019"),
/// );
/// ```
pub fn format_intervals(
    intervals: &[DateInterval],
    month_format: MonthFormat,
    include_year: bool,
) -> Option<String> {
    RangeFormatter::new()
        .with_month_format(month_format)
        .with_year(include_year)
        .format(intervals)
}

/// Render intervals in short form, with days of the week when relevant.
pub fn format_intervals_with_weekday(intervals: &[DateInterval]) -> Option<String> {
    RangeFormatter::new().format_with_weekday(intervals)
}

/// Compact a sequence of days and render it in long form with full month
/// names and years.
///
/// ```
/// use chrono::NaiveDate;
/// use day_ranges::format_date_range;
///
/// let day = |d| NaiveDate::from_ymd_opt(2019, 12, d).unwrap();
///
/// assert_eq!(
///     format_date_range((16..=20).map(day), []).as_deref(),
///     Some("December 16-20, 2019"),
/// );
/// ```
pub fn format_date_range<D: CalendarDay>(
    dates: impl IntoIterator<Item = D>,
    excluded: impl IntoIterator<Item = D>,
) -> Option<String> {
    format_intervals(
        &compact_to_intervals(dates, excluded),
        MonthFormat::Full,
        true,
    )
}

/// Compact a sequence of days and render it in short form.
pub fn format_date_range_with_weekday<D: CalendarDay>(
    dates: impl IntoIterator<Item = D>,
    excluded: impl IntoIterator<Item = D>,
) -> Option<String> {
    format_intervals_with_weekday(&compact_to_intervals(dates, excluded))
}
