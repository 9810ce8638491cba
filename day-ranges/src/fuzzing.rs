use arbitrary::Arbitrary;
use chrono::{Days, NaiveDate};

use std::fmt::Debug;

use day_set::DaySet;

use crate::day::is_next_day;
use crate::{compact_to_intervals, expand_intervals, MonthFormat, RangeFormatter};

/// Days are generated as offsets from this date.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).expect("invalid epoch")
}

#[derive(Arbitrary, Clone, Copy, Debug)]
pub enum Style {
    Long { short_months: bool, include_year: bool },
    Weekday,
}

#[derive(Arbitrary, Clone)]
pub struct Data {
    pub days: Vec<u16>,
    pub excluded: Vec<u16>,
    pub style: Style,
}

impl Data {
    fn dates(offsets: &[u16]) -> Vec<NaiveDate> {
        offsets
            .iter()
            .filter_map(|offset| epoch().checked_add_days(Days::new((*offset).into())))
            .collect()
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("days", &Self::dates(&self.days))
            .field("excluded", &Self::dates(&self.excluded))
            .field("style", &self.style)
            .finish()
    }
}

/// Check compaction and formatting invariants over arbitrary input. Return
/// false if the input was not worth keeping in a corpus.
pub fn run_fuzz_intervals(data: Data) -> bool {
    if data.days.is_empty() {
        return false;
    }

    let days = Data::dates(&data.days);
    let excluded = Data::dates(&data.excluded);
    let intervals = compact_to_intervals(&days, &excluded);

    // Covered days are exactly the input days minus excluded days
    let expected = DaySet::from(days.clone()).difference(&excluded.iter().copied().collect());
    assert_eq!(expand_intervals(&intervals), expected.into_inner());

    // Intervals are sorted and can't be merged
    for pair in intervals.windows(2) {
        assert!(pair[0].end() < pair[1].start());
        assert!(!is_next_day(pair[0].end(), pair[1].start()));
    }

    // Compacting covered days again gives the same result
    assert_eq!(
        compact_to_intervals(expand_intervals(&intervals), []),
        intervals,
    );

    let render = || match data.style {
        Style::Long { short_months, include_year } => {
            let month_format = if short_months {
                MonthFormat::Short
            } else {
                MonthFormat::Full
            };

            RangeFormatter::new()
                .with_month_format(month_format)
                .with_year(include_year)
                .format(&intervals)
        }
        Style::Weekday => RangeFormatter::new().format_with_weekday(&intervals),
    };

    let output = render();
    assert_eq!(output, render());
    assert_eq!(output.is_none(), intervals.is_empty());

    if let Some(text) = &output {
        assert!(!text.ends_with(','));
        assert!(!text.ends_with(' '));
    }

    true
}
