use crate::error::UnknownMonthFormat;
use crate::tests::days;
use crate::{
    date, format_date_range, format_intervals, interval, DateNames, MonthFormat, RangeFormatter,
};

fn long(intervals: &[crate::DateInterval]) -> Option<String> {
    format_intervals(intervals, MonthFormat::Full, true)
}

#[test]
fn empty() {
    assert_eq!(long(&[]), None);
    assert_eq!(format_intervals(&[], MonthFormat::Short, false), None);
}

#[test]
fn single_day() {
    assert_eq!(
        long(&[interval!("2019-12-18")]).as_deref(),
        Some("December 18, 2019"),
    );
}

#[test]
fn contiguous() {
    assert_eq!(
        long(&[interval!("2019-12-16", "2019-12-20")]).as_deref(),
        Some("December 16-20, 2019"),
    );
}

#[test]
fn several_groups_in_a_month() {
    let intervals = [
        interval!("2019-12-16", "2019-12-17"),
        interval!("2019-12-19", "2019-12-20"),
        interval!("2019-12-23"),
    ];

    assert_eq!(
        long(&intervals).as_deref(),
        Some("December 16-17,19-20,23, 2019"),
    );
}

#[test]
fn across_months() {
    assert_eq!(
        long(&[interval!("2019-11-28", "2019-12-03")]).as_deref(),
        Some("November 28 - December 3, 2019"),
    );

    assert_eq!(
        long(&[interval!("2019-11-28"), interval!("2019-12-03")]).as_deref(),
        Some("November 28, December 3, 2019"),
    );

    assert_eq!(
        long(&[interval!("2019-11-27", "2019-11-28"), interval!("2019-11-30", "2019-12-03")])
            .as_deref(),
        Some("November 27-28,30 - December 3, 2019"),
    );
}

#[test]
fn across_years() {
    assert_eq!(
        long(&[interval!("2019-12-23", "2020-01-06")]).as_deref(),
        Some("December 23, 2019 - January 6, 2020"),
    );

    assert_eq!(
        long(&[interval!("2019-12-30"), interval!("2020-01-02", "2020-01-03")]).as_deref(),
        Some("December 30, 2019 - January 2-3, 2020"),
    );

    assert_eq!(
        long(&[
            interval!("2019-12-23", "2020-01-06"),
            interval!("2020-01-08"),
            interval!("2020-02-03", "2020-02-04"),
        ])
        .as_deref(),
        Some("December 23, 2019 - January 6,8, February 3-4, 2020"),
    );
}

#[test]
fn without_year() {
    assert_eq!(
        format_intervals(&[interval!("2019-12-18")], MonthFormat::Full, false).as_deref(),
        Some("December 18"),
    );

    assert_eq!(
        format_intervals(&[interval!("2019-12-23", "2020-01-06")], MonthFormat::Full, false)
            .as_deref(),
        Some("December 23 - January 6"),
    );

    // Same month of another year is still a new month
    assert_eq!(
        format_intervals(
            &[interval!("2019-12-18"), interval!("2020-12-18")],
            MonthFormat::Full,
            false,
        )
        .as_deref(),
        Some("December 18, December 18"),
    );
}

#[test]
fn month_formats() {
    let intervals = [interval!("2019-02-04", "2019-02-08"), interval!("2019-03-01")];

    assert_eq!(
        format_intervals(&intervals, MonthFormat::Short, true).as_deref(),
        Some("Feb 4-8, Mar 1, 2019"),
    );

    assert_eq!(
        format_intervals(&intervals, MonthFormat::Numeric, true).as_deref(),
        Some("2 4-8, 3 1, 2019"),
    );

    assert_eq!(
        format_intervals(&intervals, MonthFormat::Padded, false).as_deref(),
        Some("02 4-8, 03 1"),
    );
}

#[test]
fn month_format_tokens() {
    for format in [
        MonthFormat::Numeric,
        MonthFormat::Padded,
        MonthFormat::Short,
        MonthFormat::Full,
    ] {
        assert_eq!(format.token().parse(), Ok(format));
        assert_eq!(format.to_string(), format.token());
    }

    let err = "MMMMM".parse::<MonthFormat>().unwrap_err();
    assert_eq!(err, UnknownMonthFormat("MMMMM".to_string()));
    assert_eq!(err.to_string(), "Unknown month format `MMMMM`");
    assert_eq!(MonthFormat::default(), MonthFormat::Full);
}

#[test]
fn from_days() {
    assert_eq!(
        format_date_range(days("2019-12-18", "2020-01-05"), [date!("2019-12-25")]).as_deref(),
        Some("December 18-24,26, 2019 - January 5, 2020"),
    );
}

#[test]
fn custom_names() {
    struct French;

    impl DateNames for French {
        fn month(&self, date: chrono::NaiveDate, _format: MonthFormat) -> String {
            use chrono::Datelike;

            match date.month() {
                11 => "novembre",
                12 => "décembre",
                _ => "?",
            }
            .to_string()
        }

        fn weekday(&self, _date: chrono::NaiveDate) -> String {
            "lun.".to_string()
        }
    }

    let formatter = RangeFormatter::new().with_names(French);

    assert_eq!(
        formatter
            .format(&[interval!("2019-11-28", "2019-12-03")])
            .as_deref(),
        Some("novembre 28 - décembre 3, 2019"),
    );

    assert_eq!(
        formatter.with_year(false).format(&[interval!("2019-12-18")]).as_deref(),
        Some("décembre 18"),
    );
}

#[test]
fn deterministic() {
    let intervals = [
        interval!("2019-11-28", "2019-12-03"),
        interval!("2019-12-23", "2020-01-06"),
    ];

    let first = long(&intervals);
    assert_eq!(first, long(&intervals));
    assert_eq!(first, RangeFormatter::default().format(&intervals));
}
