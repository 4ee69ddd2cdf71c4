//! [`MedicalDataAnalyzer`], the entry point for a patient's analytics.

use crate::analytics::appointments::{Appointment, AppointmentStats, TriageQueue};
use crate::analytics::config::AnalyticsConfig;
use crate::analytics::risk::{predict_health_risk, RiskLevel};
use crate::analytics::trend::{linear_trend, VitalsTrends};
use crate::analytics::vitals::{check_vital_alerts, VitalAlert, VitalsRecord};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A patient's vitals and appointments, as exported by the portal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientData {
    /// Vitals in the order they were recorded.
    pub vitals: Vec<VitalsRecord>,
    /// Appointments in any order.
    pub appointments: Vec<Appointment>,
}

/// Collects a patient's records and derives trends, risk and appointment
/// figures from them.
#[derive(Debug, Clone, Default)]
pub struct MedicalDataAnalyzer {
    config: AnalyticsConfig,
    vitals: Vec<VitalsRecord>,
    appointments: Vec<Appointment>,
}

impl MedicalDataAnalyzer {
    /// Creates an analyzer with no records.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            vitals: Vec::new(),
            appointments: Vec::new(),
        }
    }

    /// Creates an analyzer preloaded with `data`.
    pub fn with_data(config: AnalyticsConfig, data: PatientData) -> Self {
        tracing::debug!(
            vitals = data.vitals.len(),
            appointments = data.appointments.len(),
            "loaded patient data"
        );
        Self {
            config,
            vitals: data.vitals,
            appointments: data.appointments,
        }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Records a set of vitals. Later records count as more recent.
    pub fn add_vitals(&mut self, record: VitalsRecord) {
        self.vitals.push(record);
    }

    /// Records an appointment.
    pub fn add_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// All vitals, in the order added.
    pub fn vitals(&self) -> &[VitalsRecord] {
        &self.vitals
    }

    /// All appointments, in the order added.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Trends over the vitals dated within the configured window ending on
    /// `today` (both ends inclusive), oldest first.
    ///
    /// A window reaching past the earliest representable date starts there.
    pub fn vitals_trends(&self, today: NaiveDate) -> VitalsTrends {
        let start = today
            .checked_sub_days(Days::new(u64::from(self.config.trend_window_days)))
            .unwrap_or(NaiveDate::MIN);
        let mut window: Vec<&VitalsRecord> = self
            .vitals
            .iter()
            .filter(|v| v.date >= start && v.date <= today)
            .collect();
        window.sort_by_key(|v| v.date);

        let threshold = self.config.stable_slope_threshold;
        VitalsTrends {
            heart_rate: linear_trend(window.iter().map(|v| v.heart_rate.map(f64::from)), threshold),
            weight: linear_trend(window.iter().map(|v| v.weight), threshold),
            bmi: linear_trend(window.iter().map(|v| v.effective_bmi()), threshold),
        }
    }

    /// Risk level from the most recent vitals.
    pub fn predict_health_risk(&self) -> RiskLevel {
        predict_health_risk(&self.vitals, &self.config)
    }

    /// Alerts raised by the most recent vitals.
    pub fn latest_alerts(&self) -> Vec<VitalAlert> {
        self.vitals
            .last()
            .map(|latest| check_vital_alerts(latest, &self.config))
            .unwrap_or_default()
    }

    /// Appointment counts by status.
    pub fn appointment_stats(&self) -> AppointmentStats {
        AppointmentStats::from_appointments(&self.appointments)
    }

    /// Scheduled appointments in triage order.
    pub fn triage(&self) -> TriageQueue {
        self.appointments.iter().cloned().collect()
    }
}
