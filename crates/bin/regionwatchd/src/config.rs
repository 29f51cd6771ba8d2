//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `regionwatch.toml` in the working directory (or the path in
//! `REGIONWATCH_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::time::Duration;

use chrono::NaiveTime;
use regionwatch_domain::day_filter::DayFilter;
use regionwatch_domain::error::ParseError;
use regionwatch_domain::region::TemporalRegion;
use regionwatch_domain::serial::RegionDocument;
use serde::Deserialize;

const DEFAULT_PATH: &str = "regionwatch.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tick loop settings.
    pub monitor: MonitorConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Regions to watch.
    pub regions: Vec<RegionConfig>,
}

/// Tick loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Milliseconds between two clock reads.
    pub tick_interval_ms: u64,
    /// Start with detection enabled.
    pub enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One `[[regions]]` table: the structured region form plus an optional
/// day list, which the structured form itself does not carry.
#[derive(Debug, Deserialize)]
pub struct RegionConfig {
    #[serde(flatten)]
    pub document: RegionDocument,
    #[serde(default)]
    pub days: Option<DayFilter>,
}

impl RegionConfig {
    /// Build the region, defaulting a missing `start`/`stop` to `now`.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first malformed field.
    pub fn into_region(self, now: NaiveTime) -> Result<TemporalRegion, ParseError> {
        let mut region = self.document.into_region(now)?;
        if let Some(days) = self.days {
            *region.days_mut() = days;
        }
        Ok(region)
    }
}

impl Config {
    /// Load configuration from `regionwatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("REGIONWATCH_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("REGIONWATCH_TICK_MS") {
            if let Ok(ms) = val.parse() {
                self.monitor.tick_interval_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("REGIONWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.tick_interval_ms == 0 {
            return Err(ConfigError::Validation("tick_interval_ms must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Time between two ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.monitor.tick_interval_ms)
    }

    /// Build every configured region. Stops at the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Region`] naming the index of the bad table.
    pub fn build_regions(self, now: NaiveTime) -> Result<Vec<TemporalRegion>, ConfigError> {
        self.regions
            .into_iter()
            .enumerate()
            .map(|(index, region)| {
                region
                    .into_region(now)
                    .map_err(|source| ConfigError::Region { index, source })
            })
            .collect()
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "regionwatchd=info,regionwatch_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A `[[regions]]` entry could not be turned into a region.
    #[error("invalid region at index {index}")]
    Region {
        index: usize,
        #[source]
        source: ParseError,
    },
}
