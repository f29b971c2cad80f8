// Declare modules
pub mod event;
pub mod settings;
pub mod view;

// Re-export so callers can `use crate::Event` directly.
pub use event::{Event, RepeatRule, RepeatType, OCCURRENCE_SEPARATOR};
pub use settings::Settings;
pub use view::{ViewGranularity, ViewRange};
