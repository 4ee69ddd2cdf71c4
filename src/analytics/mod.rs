//! Descriptive analytics over a patient's vitals and appointments.
//!
//! - `vitals`: readings, BMI and out-of-range alerts
//! - `trend`: least-squares trends
//! - `risk`: rule-based risk level
//! - `appointments`: status counts and triage ordering
//! - `analyzer`: [`MedicalDataAnalyzer`], tying the above together
//! - `config`: the thresholds all of the above read

pub mod analyzer;
pub mod appointments;
pub mod config;
pub mod risk;
pub mod trend;
pub mod vitals;

pub use analyzer::{MedicalDataAnalyzer, PatientData};
pub use appointments::{
    Appointment, AppointmentPriority, AppointmentStats, AppointmentStatus, TriageQueue,
};
pub use config::{AnalyticsConfig, ConfigError};
pub use risk::{predict_health_risk, risk_score, RiskLevel};
pub use trend::{linear_trend, Trend, TrendDirection, VitalsTrends};
pub use vitals::{calculate_bmi, check_vital_alerts, AlertSeverity, VitalAlert, VitalKind, VitalsRecord};
