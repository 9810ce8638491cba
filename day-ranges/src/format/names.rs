use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::UnknownMonthFormat;

// --
// -- MonthFormat
// --

/// How month names are rendered, named after the usual date pattern tokens.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MonthFormat {
    /// `M`: "1", "12"
    Numeric,
    /// `MM`: "01", "12"
    Padded,
    /// `MMM`: "Jan", "Dec"
    Short,
    /// `MMMM`: "January", "December"
    #[default]
    Full,
}

impl MonthFormat {
    /// The pattern token matching this format.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Numeric => "M",
            Self::Padded => "MM",
            Self::Short => "MMM",
            Self::Full => "MMMM",
        }
    }
}

impl FromStr for MonthFormat {
    type Err = UnknownMonthFormat;

    /// ```
    /// use day_ranges::MonthFormat;
    ///
    /// assert_eq!("MMMM".parse(), Ok(MonthFormat::Full));
    /// assert_eq!("MMM".parse(), Ok(MonthFormat::Short));
    /// assert!("YYYY".parse::<MonthFormat>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Numeric),
            "MM" => Ok(Self::Padded),
            "MMM" => Ok(Self::Short),
            "MMMM" => Ok(Self::Full),
            _ => Err(UnknownMonthFormat(s.to_string())),
        }
    }
}

impl fmt::Display for MonthFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// --
// -- DateNames
// --

/// Provides the labels of months and days of the week.
pub trait DateNames {
    /// Label of the month `date` belongs to.
    fn month(&self, date: NaiveDate, format: MonthFormat) -> String;

    /// Abbreviated label of the day of the week of `date`.
    fn weekday(&self, date: NaiveDate) -> String;
}

/// English labels, as provided by chrono.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct English;

impl DateNames for English {
    fn month(&self, date: NaiveDate, format: MonthFormat) -> String {
        let pattern = match format {
            MonthFormat::Numeric => "%-m",
            MonthFormat::Padded => "%m",
            MonthFormat::Short => "%b",
            MonthFormat::Full => "%B",
        };

        date.format(pattern).to_string()
    }

    fn weekday(&self, date: NaiveDate) -> String {
        date.format("%a").to_string()
    }
}

impl<T: DateNames + ?Sized> DateNames for &T {
    fn month(&self, date: NaiveDate, format: MonthFormat) -> String {
        (**self).month(date, format)
    }

    fn weekday(&self, date: NaiveDate) -> String {
        (**self).weekday(date)
    }
}
