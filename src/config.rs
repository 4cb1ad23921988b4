//! Editor configuration.
//!
//! The configuration is plain serde data so the host can store it wherever it
//! keeps its settings. Every field has a default, which lets older or partial
//! files load.

use serde::{Deserialize, Serialize};

use crate::constants::{self, zoom};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Tunables of the box editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Corner grab radius in device pixels
    pub hit_epsilon: f32,

    /// Distance an arrow key moves the box, in image pixels
    pub nudge_step: f32,

    /// Created boxes narrower or shorter than this are discarded.
    /// `0.0` commits every box, including a zero-size click.
    pub min_box_size: f32,

    /// Initial zoom level of a new editor
    pub default_zoom_percent: u32,

    /// Increment of the zoom in/out commands and of one wheel notch
    pub zoom_step_percent: u32,

    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            hit_epsilon: constants::HIT_EPSILON,
            nudge_step: constants::NUDGE_STEP,
            min_box_size: 0.0,
            default_zoom_percent: zoom::DEFAULT_PERCENT,
            zoom_step_percent: zoom::STEP_PERCENT,
            log_level: LogLevel::default(),
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.hit_epsilon.is_finite() && self.hit_epsilon > 0.0) {
            return Err(ConfigError::invalid("hit_epsilon", self.hit_epsilon));
        }
        if !(self.nudge_step.is_finite() && self.nudge_step > 0.0) {
            return Err(ConfigError::invalid("nudge_step", self.nudge_step));
        }
        if !(self.min_box_size.is_finite() && self.min_box_size >= 0.0) {
            return Err(ConfigError::invalid("min_box_size", self.min_box_size));
        }
        if !(zoom::MIN_PERCENT..=zoom::MAX_PERCENT).contains(&self.default_zoom_percent) {
            return Err(ConfigError::invalid(
                "default_zoom_percent",
                self.default_zoom_percent,
            ));
        }
        if self.zoom_step_percent == 0 || self.zoom_step_percent > zoom::MAX_PERCENT {
            return Err(ConfigError::invalid(
                "zoom_step_percent",
                self.zoom_step_percent,
            ));
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A value outside its allowed range
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl ConfigError {
    fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}
