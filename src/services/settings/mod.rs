use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::style::CountdownStyle;

const CONFIG_FILE_NAME: &str = "countdown.toml";
const TARGET_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid target timestamp '{0}', expected RFC 3339 or '{TARGET_FORMAT}'")]
    InvalidTarget(String),
    #[error("target timestamp '{0}' is ambiguous in the local timezone")]
    AmbiguousTarget(String),
}

/// On-disk configuration for the main countdown page. All fields are
/// optional in the file; unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CountdownConfig {
    pub title: String,
    /// Target instant as RFC 3339 or local `%Y-%m-%d %H:%M:%S`.
    pub target: Option<String>,
    pub style: CountdownStyle,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            title: "Countdown".to_string(),
            target: None,
            style: CountdownStyle::default(),
        }
    }
}

impl CountdownConfig {
    /// Resolves the configured target instant, or the documented default
    /// (midnight starting next New Year's Day) when none is configured.
    pub fn target_instant(&self, now: DateTime<Local>) -> Result<DateTime<Local>, ConfigError> {
        match &self.target {
            Some(raw) => parse_target(raw),
            None => Ok(next_new_year(now)),
        }
    }
}

fn parse_target(raw: &str) -> Result<DateTime<Local>, ConfigError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(raw, TARGET_FORMAT)
        .map_err(|_| ConfigError::InvalidTarget(raw.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ConfigError::AmbiguousTarget(raw.to_string()))
}

fn next_new_year(now: DateTime<Local>) -> DateTime<Local> {
    use chrono::Datelike;

    // Jan 1 exists in every year, and midnight is never skipped by a DST
    // transition in practice; fall back to `earliest` just in case.
    let naive = chrono::NaiveDate::from_ymd_opt(now.year() + 1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(now.naive_local());
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or(now)
}

/// Platform config file location, if a home directory can be resolved.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "KenBoyle", "RustCountdown")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Loads configuration from the given path. A missing file is not an
/// error; it yields the defaults.
pub fn load_from(path: &Path) -> Result<CountdownConfig, ConfigError> {
    if !path.exists() {
        return Ok(CountdownConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Loads the platform config file, falling back to defaults (with a logged
/// warning) when the file is unreadable or malformed.
pub fn load_or_default() -> CountdownConfig {
    let Some(path) = config_path() else {
        log::warn!("Could not resolve a config directory, using default configuration");
        return CountdownConfig::default();
    };

    match load_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "Failed to load {}: {}, using default configuration",
                path.display(),
                err
            );
            CountdownConfig::default()
        }
    }
}
