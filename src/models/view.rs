// file: src/models/view.rs
use crate::error::AppError;
use crate::utils::date::is_date_in_range;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of the calendar display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewGranularity {
    Week,
    #[default]
    Month,
}

impl fmt::Display for ViewGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

impl FromStr for ViewGranularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(AppError::invalid_input(format!(
                "unknown view '{}', expected 'week' or 'month'",
                other
            ))),
        }
    }
}

/// Inclusive instant range of a display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ViewRange {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        is_date_in_range(instant, self.start, self.end)
    }
}
