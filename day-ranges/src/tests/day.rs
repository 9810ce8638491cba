use crate::day::{days_between, is_next_day, same_day, same_iso_week};
use crate::{date, datetime};

#[test]
fn same_calendar_day() {
    assert!(same_day(date!("2019-12-18"), datetime!("2019-12-18 23:59")));
    assert!(same_day(datetime!("2019-12-18 00:00"), datetime!("2019-12-18 23:59")));
    assert!(!same_day(datetime!("2019-12-18 23:59"), datetime!("2019-12-19 00:00")));
}

#[test]
fn difference_in_days() {
    assert_eq!(days_between(date!("2019-12-18"), date!("2019-12-18")), 0);
    assert_eq!(days_between(date!("2019-12-18"), date!("2020-01-05")), 18);
    assert_eq!(days_between(date!("2020-03-01"), date!("2020-02-28")), -2);

    // One minute apart, but on different days
    assert_eq!(
        days_between(datetime!("2019-12-18 23:59"), datetime!("2019-12-19 00:00")),
        1,
    );

    // Almost two days apart, but on consecutive days
    assert_eq!(
        days_between(datetime!("2019-12-18 00:00"), datetime!("2019-12-19 23:59")),
        1,
    );
}

#[test]
fn difference_in_days_across_dst() {
    use chrono_tz::America::New_York;
    use chrono_tz::Europe::Paris;

    // 23 hours in Paris
    assert_eq!(
        days_between(
            datetime!("2019-03-31 00:00", Paris),
            datetime!("2019-04-01 00:00", Paris),
        ),
        1,
    );

    // 25 hours in Paris
    assert_eq!(
        days_between(
            datetime!("2019-10-27 00:00", Paris),
            datetime!("2019-10-28 00:00", Paris),
        ),
        1,
    );

    assert!(is_next_day(
        datetime!("2019-03-10 00:30", New_York),
        datetime!("2019-03-11 00:15", New_York),
    ));

    // Calendar days are taken in the time zone of each value
    assert!(same_day(
        datetime!("2019-11-03 23:30", New_York),
        date!("2019-11-03"),
    ));
}

#[test]
fn next_day() {
    assert!(is_next_day(date!("2019-12-31"), date!("2020-01-01")));
    assert!(is_next_day(date!("2020-02-28"), date!("2020-02-29")));
    assert!(!is_next_day(date!("2019-02-28"), date!("2019-03-02")));
    assert!(!is_next_day(date!("2019-12-18"), date!("2019-12-18")));
    assert!(!is_next_day(date!("2019-12-19"), date!("2019-12-18")));
}

#[test]
fn iso_weeks() {
    // Monday to Sunday
    assert!(same_iso_week(date!("2019-12-16"), date!("2019-12-22")));
    assert!(!same_iso_week(date!("2019-12-22"), date!("2019-12-23")));

    // 2019-12-30 already belongs to the first week of 2020
    assert!(same_iso_week(date!("2019-12-30"), date!("2020-01-05")));

    // Same week number, different years
    assert!(!same_iso_week(date!("2019-12-18"), date!("2020-12-16")));
}
