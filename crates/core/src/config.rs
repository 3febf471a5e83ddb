//! Reading-rate configuration.
//!
//! The words-per-minute rate and the rounding constants live here instead of
//! being baked into the estimator, so alternate rates can be tested and
//! configured from a file.
//!
//! # Example
//!
//! ```rust
//! use readtime_core::{ReadingConfig, RoundingPolicy};
//!
//! let config = ReadingConfig::builder()
//!     .words_per_minute(250.0)
//!     .rounding(RoundingPolicy::Ceil)
//!     .build();
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ReadTimeError, Result};

/// Default reading rate in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 200.0;

/// Multiplier applied to the fractional minute under [`RoundingPolicy::Legacy`].
pub const DEFAULT_FRACTION_SCALE: f64 = 0.60;

/// Scaled fraction at or above which [`RoundingPolicy::Legacy`] rounds up.
pub const DEFAULT_ROUND_UP_THRESHOLD: f64 = 0.30;

/// Environment variable that replaces the platform config dir when looking
/// for `config.json`.
pub const CONFIG_DIR_ENV: &str = "READTIME_CONFIG_DIR";

/// How a fractional minute is turned into a whole-minute estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// `fraction * fraction_scale < round_up_threshold` keeps the whole
    /// minutes, anything else adds one.
    #[default]
    Legacy,
    /// Converts the fraction to seconds and rounds up from 30 seconds.
    ///
    /// With the default scale and threshold this rounds exactly like
    /// `Legacy`; it differs only once those constants are changed, since it
    /// ignores them.
    Seconds,
    /// Any started minute counts as a full minute.
    Ceil,
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "seconds" => Ok(Self::Seconds),
            "ceil" => Ok(Self::Ceil),
            _ => Err(format!("Invalid rounding policy: {}. Valid options: legacy, seconds, ceil", s)),
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Legacy => "legacy",
            Self::Seconds => "seconds",
            Self::Ceil => "ceil",
        };
        f.write_str(name)
    }
}

/// Configuration for the reading-time estimator.
///
/// Missing fields in a configuration file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Reading rate (default: 200.0).
    pub words_per_minute: f64,

    /// Multiplier for the fractional minute (default: 0.60).
    pub fraction_scale: f64,

    /// Round-up threshold for the scaled fraction (default: 0.30).
    pub round_up_threshold: f64,

    /// Rounding policy (default: legacy).
    pub rounding: RoundingPolicy,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            fraction_scale: DEFAULT_FRACTION_SCALE,
            round_up_threshold: DEFAULT_ROUND_UP_THRESHOLD,
            rounding: RoundingPolicy::Legacy,
        }
    }
}

impl ReadingConfig {
    /// Creates a new builder for ReadingConfig.
    pub fn builder() -> ReadingConfigBuilder {
        ReadingConfigBuilder::new()
    }

    /// Checks that the rate is usable as a divisor and the rounding
    /// constants are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.words_per_minute.is_finite() || self.words_per_minute <= 0.0 {
            return Err(ReadTimeError::ConfigError(format!(
                "words_per_minute must be a positive number, got {}",
                self.words_per_minute
            )));
        }

        for (name, value) in [
            ("fraction_scale", self.fraction_scale),
            ("round_up_threshold", self.round_up_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ReadTimeError::ConfigError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Reads a JSON configuration file and validates it.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReadTimeError::FileNotFound(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| ReadTimeError::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from `custom` when given, otherwise from the
    /// user's config directory if a file exists there, otherwise defaults.
    pub fn load(custom: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading reading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `$READTIME_CONFIG_DIR/config.json` when the variable is set, otherwise
    /// `<config_dir>/readtime/config.json` if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        let dir = std::env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("readtime")))?;
        Some(dir.join("config.json"))
    }
}

/// Fluent builder for [`ReadingConfig`].
pub struct ReadingConfigBuilder {
    config: ReadingConfig,
}

impl ReadingConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ReadingConfig::default() }
    }

    /// Sets the reading rate.
    pub fn words_per_minute(mut self, value: f64) -> Self {
        self.config.words_per_minute = value;
        self
    }

    /// Sets the fractional-minute multiplier.
    pub fn fraction_scale(mut self, value: f64) -> Self {
        self.config.fraction_scale = value;
        self
    }

    /// Sets the round-up threshold.
    pub fn round_up_threshold(mut self, value: f64) -> Self {
        self.config.round_up_threshold = value;
        self
    }

    /// Sets the rounding policy.
    pub fn rounding(mut self, value: RoundingPolicy) -> Self {
        self.config.rounding = value;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ReadingConfig {
        self.config
    }
}

impl Default for ReadingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
