//! Configuration loading
//!
//! Settings live in a small JSON file. An explicit path must exist; without
//! one the per-user config directory is tried, then built-in defaults.

use crate::error::{AppError, AppResult};
use crate::models::Settings;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "recurview";
pub const SETTINGS_FILE: &str = "settings.json";

/// `<config dir>/recurview/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

pub fn load_settings(path: Option<&Path>) -> AppResult<Settings> {
    let settings = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::not_found(format!(
                    "settings file {}",
                    path.display()
                )));
            }
            read_settings(path)?
        }
        None => match default_settings_path().filter(|p| p.exists()) {
            Some(path) => read_settings(&path)?,
            None => {
                debug!("No settings file found, using defaults");
                Settings::default()
            }
        },
    };

    validate_config(&settings)?;
    Ok(settings)
}

fn read_settings(path: &Path) -> AppResult<Settings> {
    debug!("Reading settings from {}", path.display());
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Err(AppError::config(format!("{} is empty", path.display())));
    }
    Ok(serde_json::from_str(&raw)?)
}

/// Validates loaded settings.
///
/// Every weekday and view is a valid choice, so this only reports what is
/// in effect.
pub fn validate_config(settings: &Settings) -> AppResult<()> {
    info!(
        "Configuration: weeks start on {}, default view {}",
        settings.week_start, settings.default_view
    );
    Ok(())
}
