use crate::models::{ViewGranularity, ViewRange};
use crate::utils::date::{end_of_day, first_of_month, last_of_month, start_of_day, week_dates};
use chrono::{NaiveDate, Weekday};

/// Inclusive instant range of the week or month containing `reference`.
pub fn resolve_range(
    reference: NaiveDate,
    granularity: ViewGranularity,
    week_start: Weekday,
) -> ViewRange {
    let (first, last) = match granularity {
        ViewGranularity::Week => {
            let week = week_dates(reference, week_start);
            (week[0], week[6])
        }
        ViewGranularity::Month => (first_of_month(reference), last_of_month(reference)),
    };

    ViewRange {
        start: start_of_day(first),
        end: end_of_day(last),
    }
}
