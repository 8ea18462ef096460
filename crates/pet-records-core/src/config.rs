//! Runtime configuration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timeline::DEFAULT_DASHBOARD_LIMIT;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Source of the reference instant records are classified against.
///
/// Stored calendar strings are never converted, so this only decides which
/// wall-clock "now" is compared with them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceClock {
    Utc,
    #[default]
    Local,
}

impl ReferenceClock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            ReferenceClock::Utc => chrono::Utc::now().naive_utc(),
            ReferenceClock::Local => chrono::Local::now().naive_local(),
        }
    }
}

/// Core configuration, usually supplied by the host app as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CoreConfig {
    pub reference_clock: ReferenceClock,
    /// Items shown per list on the dashboard
    pub dashboard_limit: usize,
    /// `tracing` filter directive, e.g. "info" or "pet_records_core=debug".
    /// When set, a subscriber is installed as the core is opened.
    pub log_filter: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            reference_clock: ReferenceClock::default(),
            dashboard_limit: DEFAULT_DASHBOARD_LIMIT,
            log_filter: None,
        }
    }
}

impl CoreConfig {
    /// Parse and validate; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard_limit == 0 {
            return Err(ConfigError::Invalid("dashboard_limit must be at least 1".into()));
        }
        if let Some(filter) = &self.log_filter {
            crate::logging::parse_filter(filter)
                .map_err(|e| ConfigError::Invalid(format!("log_filter '{}': {}", filter, e)))?;
        }
        Ok(())
    }
}
