// recurview library
// Expands stored calendar events into the dated occurrences of a week or month view

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use calendar::{
    expand_occurrences, filter_by_term, find_overlapping_events, get_filtered_occurrences,
    resolve_range, OccurrenceQuery,
};
pub use error::{AppError, AppResult};
pub use models::*;
