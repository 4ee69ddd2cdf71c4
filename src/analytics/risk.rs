//! Rule-based health-risk scoring.

use crate::analytics::config::AnalyticsConfig;
use crate::analytics::vitals::VitalsRecord;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Coarse health-risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No vitals to judge from.
    Unknown,
    /// Score below the medium threshold.
    Low,
    /// Score at or above the medium threshold.
    Medium,
    /// Score at or above the high threshold.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "Unknown",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

/// Scores one set of vitals. Missing readings contribute nothing.
///
/// - heart rate outside the normal range: +2
/// - systolic or diastolic pressure above the high limit: +2
/// - BMI outside the normal range: +1, and outside the severe range: +2 more
pub fn risk_score(record: &VitalsRecord, config: &AnalyticsConfig) -> u32 {
    let mut score = 0;

    if let Some(rate) = record.heart_rate {
        if config.heart_rate.excludes(f64::from(rate)) {
            score += 2;
        }
    }

    let limits = &config.blood_pressure;
    let high_systolic = record
        .blood_pressure_systolic
        .is_some_and(|sys| f64::from(sys) > limits.high_systolic);
    let high_diastolic = record
        .blood_pressure_diastolic
        .is_some_and(|dia| f64::from(dia) > limits.high_diastolic);
    if high_systolic || high_diastolic {
        score += 2;
    }

    if let Some(bmi) = record.effective_bmi() {
        if config.bmi_normal.excludes(bmi) {
            score += 1;
        }
        if config.bmi_severe.excludes(bmi) {
            score += 2;
        }
    }

    score
}

/// Maps a score onto a [`RiskLevel`].
pub fn risk_level(score: u32, config: &AnalyticsConfig) -> RiskLevel {
    if score >= config.risk.high {
        RiskLevel::High
    } else if score >= config.risk.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Risk level of the most recently added record in `records`.
pub fn predict_health_risk(records: &[VitalsRecord], config: &AnalyticsConfig) -> RiskLevel {
    match records.last() {
        Some(latest) => risk_level(risk_score(latest, config), config),
        None => RiskLevel::Unknown,
    }
}
