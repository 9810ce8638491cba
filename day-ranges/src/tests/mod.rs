mod day;
mod long_form;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}

#[macro_export]
macro_rules! interval {
    ( $day: expr ) => {{
        $crate::DateInterval::single($crate::date!($day))
    }};
    ( $start: expr, $end: expr ) => {{
        $crate::DateInterval::new($crate::date!($start), $crate::date!($end))
            .expect("interval ends before it starts")
    }};
}

/// List all days from `start` to `end`, both included.
fn days(start: &str, end: &str) -> Vec<chrono::NaiveDate> {
    let end = date!(end);
    date!(start).iter_days().take_while(|day| *day <= end).collect()
}
