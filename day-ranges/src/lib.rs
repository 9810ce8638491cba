#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod day;
pub mod error;
pub mod format;
pub mod interval;

#[cfg(any(feature = "fuzzing", test))]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::day::CalendarDay;
pub use crate::format::{
    format_date_range, format_date_range_with_weekday, format_intervals,
    format_intervals_with_weekday, DateNames, English, MonthFormat, RangeFormatter,
};
pub use crate::interval::{compact_to_intervals, expand_intervals, DateInterval};
pub use day_set::DaySet;
