use std::env;

use chrono::NaiveDate;

use day_ranges::{compact_to_intervals, RangeFormatter};

fn main() {
    let mut days = Vec::new();
    let mut excluded = Vec::new();
    let mut target = &mut days;

    for arg in env::args().skip(1) {
        if arg == "--exclude" {
            target = &mut excluded;
            continue;
        }

        match arg.parse::<NaiveDate>() {
            Ok(day) => target.push(day),
            Err(err) => panic!("invalid date `{arg}`: {err}"),
        }
    }

    if days.is_empty() {
        panic!("Usage: ./date_ranges <DATE>... [--exclude <DATE>...]");
    }

    let intervals = compact_to_intervals(&days, &excluded);
    let formatter = RangeFormatter::new();

    for interval in &intervals {
        println!(" - {interval} ({} days)", interval.len_days());
    }

    println!("---");
    println!("{}", formatter.format(&intervals).unwrap_or_default());
    println!("{}", formatter.format_with_weekday(&intervals).unwrap_or_default());
}
