use crate::models::Event;
use chrono::NaiveTime;
use log::warn;

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// `[start, end)` of an event's time slot, `None` if either time is malformed.
fn time_slot(event: &Event) -> Option<(NaiveTime, NaiveTime)> {
    match (parse_time(&event.start_time), parse_time(&event.end_time)) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => {
            warn!(
                "Event '{}' has unparseable times '{}'-'{}', ignored for overlap check",
                event.id, event.start_time, event.end_time
            );
            None
        }
    }
}

/// Stored events that clash with `candidate` on its date.
///
/// Repeating candidates never report overlaps: a series is allowed to sit on
/// top of existing one-off events.
pub fn find_overlapping_events<'a>(candidate: &Event, events: &'a [Event]) -> Vec<&'a Event> {
    if candidate.is_repeating() {
        return Vec::new();
    }
    let Some((start, end)) = time_slot(candidate) else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|other| other.id != candidate.id && other.date == candidate.date)
        .filter(|other| match time_slot(other) {
            Some((other_start, other_end)) => start < other_end && other_start < end,
            None => false,
        })
        .collect()
}
