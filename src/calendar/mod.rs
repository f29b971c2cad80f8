// Calendar view computation
// Turns stored events into the dated occurrences a week or month view shows

use crate::models::{Event, Settings, ViewGranularity};
use crate::utils::logging::log_expansion;
use chrono::{NaiveDate, Weekday};

pub mod expand;
pub mod overlap;
pub mod range;
pub mod search;

pub use expand::expand_occurrences;
pub use overlap::find_overlapping_events;
pub use range::resolve_range;
pub use search::filter_by_term;

/// One request for the occurrences a calendar view displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceQuery {
    pub search_term: String,
    pub reference_date: NaiveDate,
    pub view: ViewGranularity,
    pub week_start: Weekday,
}

impl OccurrenceQuery {
    pub fn new(
        search_term: impl Into<String>,
        reference_date: NaiveDate,
        view: ViewGranularity,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            reference_date,
            view,
            week_start: Settings::default().week_start,
        }
    }

    pub fn from_settings(
        settings: &Settings,
        search_term: impl Into<String>,
        reference_date: NaiveDate,
        view: Option<ViewGranularity>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            reference_date,
            view: view.unwrap_or(settings.default_view),
            week_start: settings.week_start,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Matching events expanded over the view, in input order; each event's
    /// occurrences are in ascending date order.
    pub fn run(&self, events: &[Event]) -> Vec<Event> {
        let range = resolve_range(self.reference_date, self.view, self.week_start);
        let matched = filter_by_term(events, &self.search_term);

        let mut occurrences = Vec::new();
        for event in &matched {
            expand::expand_into(event, &range, &mut occurrences);
        }

        log_expansion(self.view, &range, matched.len(), occurrences.len());
        occurrences
    }
}

/// Occurrences of `events` matching `search_term` in the week or month
/// containing `reference_date`, with Sunday-start weeks.
pub fn get_filtered_occurrences(
    events: &[Event],
    search_term: &str,
    reference_date: NaiveDate,
    view: ViewGranularity,
) -> Vec<Event> {
    OccurrenceQuery::new(search_term, reference_date, view).run(events)
}
