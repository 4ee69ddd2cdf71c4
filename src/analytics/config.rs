//! Thresholds for alerts, trends and risk scoring.
//!
//! Every field has a default, so a partial JSON document only overrides the
//! values it names:
//!
//! ```rust
//! use carekit::analytics::AnalyticsConfig;
//!
//! let config = AnalyticsConfig::from_json_str(r#"{ "trend_window_days": 90 }"#).unwrap();
//! assert_eq!(config.trend_window_days, 90);
//! assert_eq!(config.heart_rate.max, 100.0);
//! ```

use core::fmt;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inclusive normal range for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Readings strictly below this are out of range.
    pub min: f64,
    /// Readings strictly above this are out of range.
    pub max: f64,
}

impl Bounds {
    /// Creates a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies outside `min..=max`.
    pub fn excludes(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }
}

/// Blood pressure limits, in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodPressureLimits {
    /// Systolic readings above this are high.
    pub high_systolic: f64,
    /// Diastolic readings above this are high.
    pub high_diastolic: f64,
    /// Systolic readings below this are low.
    pub low_systolic: f64,
    /// Diastolic readings below this are low.
    pub low_diastolic: f64,
}

impl Default for BloodPressureLimits {
    fn default() -> Self {
        Self {
            high_systolic: 140.0,
            high_diastolic: 90.0,
            low_systolic: 90.0,
            low_diastolic: 60.0,
        }
    }
}

/// Score cut-offs for [`RiskLevel`](crate::analytics::RiskLevel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Minimum score for a high risk level.
    pub high: u32,
    /// Minimum score for a medium risk level.
    pub medium: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { high: 4, medium: 2 }
    }
}

/// Tunable thresholds used across the analytics module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// How many days back from "today" a trend looks.
    pub trend_window_days: u32,
    /// Slopes with an absolute value below this are reported as stable.
    pub stable_slope_threshold: f64,
    /// Normal heart rate, bpm.
    pub heart_rate: Bounds,
    /// Blood pressure limits.
    pub blood_pressure: BloodPressureLimits,
    /// Temperatures above this (°F) are a fever.
    pub fever_temperature: f64,
    /// Temperatures below this (°F) are low.
    pub low_temperature: f64,
    /// Oxygen saturation below this (%) is low.
    pub low_oxygen_saturation: f64,
    /// Normal BMI range.
    pub bmi_normal: Bounds,
    /// BMI outside this range carries extra risk.
    pub bmi_severe: Bounds,
    /// Risk score cut-offs.
    pub risk: RiskThresholds,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trend_window_days: 30,
            stable_slope_threshold: 0.1,
            heart_rate: Bounds::new(60.0, 100.0),
            blood_pressure: BloodPressureLimits::default(),
            fever_temperature: 100.4,
            low_temperature: 97.0,
            low_oxygen_saturation: 95.0,
            bmi_normal: Bounds::new(18.5, 25.0),
            bmi_severe: Bounds::new(16.0, 30.0),
            risk: RiskThresholds::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded analytics config");
        Self::from_json_str(&contents)
    }

    /// Checks that ranges are ordered and thresholds are non-negative.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("heart_rate", self.heart_rate),
            ("bmi_normal", self.bmi_normal),
            ("bmi_severe", self.bmi_severe),
        ];
        for (name, bounds) in ranges {
            if bounds.min > bounds.max {
                return Err(ConfigError::Invalid(format!(
                    "{name}: min {} exceeds max {}",
                    bounds.min, bounds.max
                )));
            }
        }
        let bp = &self.blood_pressure;
        if bp.low_systolic > bp.high_systolic {
            return Err(ConfigError::Invalid(
                "blood_pressure.low_systolic exceeds blood_pressure.high_systolic".into(),
            ));
        }
        if bp.low_diastolic > bp.high_diastolic {
            return Err(ConfigError::Invalid(
                "blood_pressure.low_diastolic exceeds blood_pressure.high_diastolic".into(),
            ));
        }
        if self.low_temperature > self.fever_temperature {
            return Err(ConfigError::Invalid(
                "low_temperature exceeds fever_temperature".into(),
            ));
        }
        if self.stable_slope_threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "stable_slope_threshold must not be negative".into(),
            ));
        }
        if self.risk.medium > self.risk.high {
            return Err(ConfigError::Invalid(
                "risk.medium exceeds risk.high".into(),
            ));
        }
        Ok(())
    }
}

/// The error type for loading an [`AnalyticsConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The JSON was malformed or had the wrong shape.
    Parse(serde_json::Error),
    /// The values parsed but are inconsistent.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => f.write_str("failed to read analytics config"),
            Self::Parse(_) => f.write_str("failed to parse analytics config"),
            Self::Invalid(reason) => write!(f, "invalid analytics config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
