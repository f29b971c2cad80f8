// file: src/models/event.rs
use crate::utils::date::{to_iso_date, ISO_DATE_FORMAT};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Separator between the series id and the instance date in an occurrence id.
pub const OCCURRENCE_SEPARATOR: char = '@';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

fn default_interval() -> i32 {
    1
}

/// Stored events may carry `null` where a field is unset; read it as absent.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_interval<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_else(default_interval))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    #[serde(default = "default_interval", deserialize_with = "null_as_default_interval")]
    pub interval: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for RepeatRule {
    /// What a stored event without a `repeat` field means: a one-off.
    fn default() -> Self {
        Self {
            kind: RepeatType::None,
            interval: 0,
            end_date: None,
        }
    }
}

impl RepeatRule {
    pub fn new(kind: RepeatType, interval: i32) -> Self {
        Self {
            kind,
            interval,
            end_date: None,
        }
    }

    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// A rule repeats only with a real type and a positive step.
    pub fn is_repeating(&self) -> bool {
        self.kind != RepeatType::None && self.interval > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repeat: RepeatRule,
    #[serde(default)]
    pub notification_time: u32,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub exceptions: BTreeSet<NaiveDate>,
}

impl Event {
    pub fn is_repeating(&self) -> bool {
        self.repeat.is_repeating()
    }

    pub fn is_exception(&self, date: NaiveDate) -> bool {
        self.exceptions.contains(&date)
    }

    /// Copy of this event placed on `date`, addressable as `id@YYYY-MM-DD`.
    pub fn occurrence_on(&self, date: NaiveDate) -> Event {
        Event {
            id: format!("{}{}{}", self.id, OCCURRENCE_SEPARATOR, to_iso_date(date)),
            date,
            ..self.clone()
        }
    }

    /// Id of the series this event belongs to. For a stored event that is
    /// its own id.
    pub fn series_id(&self) -> &str {
        match self.id.rsplit_once(OCCURRENCE_SEPARATOR) {
            Some((series, suffix)) if parse_iso_date(suffix).is_some() => series,
            _ => &self.id,
        }
    }

    pub fn is_occurrence(&self) -> bool {
        self.series_id().len() != self.id.len()
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).ok()
}
