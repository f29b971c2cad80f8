//! Calendar arithmetic shared by the range resolver and the expander.
//!
//! Everything here works on naive (wall-clock) dates, so occurrence dates
//! never drift across a UTC offset.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// The 7 dates of the week containing `date`, starting on `week_start`.
pub fn week_dates(date: NaiveDate, week_start: Weekday) -> [NaiveDate; 7] {
    let offset = (7 + date.weekday().num_days_from_monday()
        - week_start.num_days_from_monday())
        % 7;
    let first = date
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN);
    let mut week = [first; 7];
    for (i, day) in week.iter_mut().enumerate() {
        *day = first
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX);
    }
    week
}

/// Inclusive on both ends.
pub fn is_date_in_range(instant: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    instant >= start && instant <= end
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Number of days in `month` (1-based) of `year`: the day before the first
/// of the following month. 0 for a month chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(0, |last| last.day())
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    match days_in_month(date.year(), date.month()) {
        // only the final month chrono can represent has no following month
        0 => NaiveDate::MAX,
        days => first_of_month(date)
            .checked_add_days(Days::new(u64::from(days - 1)))
            .unwrap_or(NaiveDate::MAX),
    }
}

/// Months since year 0, so month stepping is plain integer arithmetic.
pub fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Inverse of [`month_index`]: `(year, month)` with a 1-based month.
pub fn year_month_from_index(index: i64) -> Option<(i32, u32)> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    Some((year, month))
}
