// file: src/models/settings.rs
use super::view::ViewGranularity;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub week_start: Weekday,
    pub default_view: ViewGranularity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            default_view: ViewGranularity::Month,
        }
    }
}
