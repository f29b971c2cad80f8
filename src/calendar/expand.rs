//! Recurring-event occurrence expansion.
//!
//! A series is anchored on `Event::date` and stepped in whole days, months or
//! years. Monthly and yearly steps never clamp: a series anchored on the 31st
//! simply has no occurrence in a 30-day month, and a Feb 29 anchor only
//! occurs in leap years.

use crate::models::{Event, RepeatType, ViewRange};
use crate::utils::date::{
    days_in_month, month_index, start_of_day, to_iso_date, year_month_from_index,
};
use chrono::{Datelike, Days, NaiveDate};
use log::trace;

/// Concrete occurrences of `event` inside `range`, in ascending date order.
///
/// A one-off event (or one whose interval is not positive) is returned
/// unchanged when its date falls in the range; its `repeat.end_date` is not
/// consulted.
pub fn expand_occurrences(event: &Event, range: &ViewRange) -> Vec<Event> {
    let mut out = Vec::new();
    expand_into(event, range, &mut out);
    out
}

/// Same as [`expand_occurrences`] but appends to `out`.
pub fn expand_into(event: &Event, range: &ViewRange, out: &mut Vec<Event>) {
    if !event.is_repeating() {
        if range.contains(start_of_day(event.date)) && !event.is_exception(event.date) {
            out.push(event.clone());
        }
        return;
    }

    if start_of_day(event.date) > range.end {
        return;
    }
    if let Some(end_date) = event.repeat.end_date {
        if start_of_day(end_date) < range.start {
            return;
        }
    }

    let interval = i64::from(event.repeat.interval);
    let mut sink = OccurrenceSink { event, range, out };

    match event.repeat.kind {
        RepeatType::Daily => expand_by_days(event.date, interval, &mut sink),
        RepeatType::Weekly => expand_by_days(event.date, 7 * interval, &mut sink),
        RepeatType::Monthly => expand_monthly(event.date, interval, &mut sink),
        RepeatType::Yearly => expand_yearly(event.date, interval, &mut sink),
        RepeatType::None => {}
    }
}

/// Applies the per-candidate checks and records what survives.
struct OccurrenceSink<'a> {
    event: &'a Event,
    range: &'a ViewRange,
    out: &'a mut Vec<Event>,
}

impl OccurrenceSink<'_> {
    fn push_if_in_range(&mut self, date: NaiveDate) {
        if !self.range.contains(start_of_day(date)) {
            return;
        }
        if let Some(end_date) = self.event.repeat.end_date {
            if date > end_date {
                return;
            }
        }
        if self.event.is_exception(date) {
            trace!("{}: {} is an exception, skipped", self.event.id, to_iso_date(date));
            return;
        }
        self.out.push(self.event.occurrence_on(date));
    }

    fn past_range(&self, date: NaiveDate) -> bool {
        start_of_day(date) > self.range.end
    }
}

/// Smallest `k >= 0` with `k * step >= gap`.
fn steps_to_reach(gap: i64, step: i64) -> i64 {
    if gap <= 0 {
        0
    } else {
        (gap + step - 1) / step
    }
}

fn expand_by_days(anchor: NaiveDate, step_days: i64, sink: &mut OccurrenceSink<'_>) {
    let gap = (sink.range.start.date() - anchor).num_days();
    let mut offset = steps_to_reach(gap, step_days) * step_days;

    loop {
        let Ok(days) = u64::try_from(offset) else { break };
        let Some(date) = anchor.checked_add_days(Days::new(days)) else { break };
        if sink.past_range(date) {
            break;
        }
        sink.push_if_in_range(date);
        offset += step_days;
    }
}

fn expand_monthly(anchor: NaiveDate, interval: i64, sink: &mut OccurrenceSink<'_>) {
    let day = anchor.day();
    let anchor_index = month_index(anchor);
    let gap = month_index(sink.range.start.date()) - anchor_index;
    let mut index = anchor_index + steps_to_reach(gap, interval) * interval;

    loop {
        let Some((year, month)) = year_month_from_index(index) else { break };
        let Some(month_start) = NaiveDate::from_ymd_opt(year, month, 1) else { break };
        if sink.past_range(month_start) {
            break;
        }

        if day <= days_in_month(year, month) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                sink.push_if_in_range(date);
            }
        } else {
            trace!("{}-{:02} has no day {}, skipped", year, month, day);
        }
        index += interval;
    }
}

fn expand_yearly(anchor: NaiveDate, interval: i64, sink: &mut OccurrenceSink<'_>) {
    let anchor_year = i64::from(anchor.year());
    let gap = i64::from(sink.range.start.year()) - anchor_year;
    let last_year = i64::from(sink.range.end.year());
    let mut year = anchor_year + steps_to_reach(gap, interval) * interval;

    while year <= last_year {
        let Ok(y) = i32::try_from(year) else { break };
        if anchor.day() <= days_in_month(y, anchor.month()) {
            if let Some(date) = NaiveDate::from_ymd_opt(y, anchor.month(), anchor.day()) {
                sink.push_if_in_range(date);
            }
        } else {
            trace!("{} has no {:02}-{:02}, skipped", y, anchor.month(), anchor.day());
        }
        year += interval;
    }
}
