use crate::models::Event;
use crate::utils::{contains_term, normalize_term};

/// Events whose title, description or location contain `term`, ignoring
/// case. Input order is kept.
pub fn filter_by_term<'a>(events: &'a [Event], term: &str) -> Vec<&'a Event> {
    let term = normalize_term(term);
    events
        .iter()
        .filter(|event| {
            contains_term(&event.title, &term)
                || contains_term(&event.description, &term)
                || contains_term(&event.location, &term)
        })
        .collect()
}
