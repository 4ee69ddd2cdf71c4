//! Vital-sign readings, BMI and out-of-range alerts.

use crate::analytics::config::AnalyticsConfig;
use chrono::NaiveDate;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One set of vitals taken on a given day.
///
/// Any reading may be missing. Field names match the portal's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsRecord {
    /// Day the readings were taken (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Heart rate, bpm.
    #[serde(default)]
    pub heart_rate: Option<u32>,
    /// Systolic blood pressure, mmHg.
    #[serde(default)]
    pub blood_pressure_systolic: Option<u32>,
    /// Diastolic blood pressure, mmHg.
    #[serde(default)]
    pub blood_pressure_diastolic: Option<u32>,
    /// Body temperature, °F.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Oxygen saturation, %.
    #[serde(default)]
    pub oxygen_saturation: Option<u32>,
    /// Weight, kg.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Height, cm.
    #[serde(default)]
    pub height: Option<f64>,
    /// Body-mass index as recorded.
    #[serde(default)]
    pub bmi: Option<f64>,
}

impl VitalsRecord {
    /// Creates a record with no readings.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            heart_rate: None,
            blood_pressure_systolic: None,
            blood_pressure_diastolic: None,
            temperature: None,
            oxygen_saturation: None,
            weight: None,
            height: None,
            bmi: None,
        }
    }

    /// The recorded BMI, or one computed from weight and height.
    pub fn effective_bmi(&self) -> Option<f64> {
        self.bmi.or_else(|| calculate_bmi(self.weight, self.height))
    }
}

/// Body-mass index from weight (kg) and height (cm), rounded to two
/// decimals.
///
/// Returns `None` unless both values are present and positive.
pub fn calculate_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    match (weight_kg, height_cm) {
        (Some(weight), Some(height)) if weight > 0.0 && height > 0.0 => {
            let height_m = height / 100.0;
            Some((weight / (height_m * height_m) * 100.0).round() / 100.0)
        }
        _ => None,
    }
}

/// Which vital an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    /// Heart rate.
    HeartRate,
    /// Blood pressure.
    BloodPressure,
    /// Body temperature.
    Temperature,
    /// Oxygen saturation.
    OxygenSaturation,
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeartRate => "Heart Rate",
            Self::BloodPressure => "Blood Pressure",
            Self::Temperature => "Temperature",
            Self::OxygenSaturation => "Oxygen Saturation",
        })
    }
}

/// How a reading is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Below the normal range.
    Low,
    /// Above the normal range.
    High,
    /// Temperature above the fever threshold.
    Fever,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::High => "High",
            Self::Fever => "Fever",
        })
    }
}

/// An out-of-range reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalAlert {
    /// The vital concerned.
    pub vital: VitalKind,
    /// Direction of the deviation.
    pub severity: AlertSeverity,
    /// The reading, formatted for display (`"150/95"` for blood pressure).
    pub reading: String,
}

impl VitalAlert {
    fn new(vital: VitalKind, severity: AlertSeverity, reading: impl fmt::Display) -> Self {
        Self {
            vital,
            severity,
            reading: reading.to_string(),
        }
    }
}

impl fmt::Display for VitalAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} ({})", self.vital, self.severity, self.reading)
    }
}

/// Lists every reading in `record` that falls outside the configured limits.
///
/// A zero reading counts as not taken. Blood pressure is only checked when
/// both readings are present, and a high reading takes precedence over a
/// low one.
pub fn check_vital_alerts(record: &VitalsRecord, config: &AnalyticsConfig) -> Vec<VitalAlert> {
    let mut alerts = Vec::new();
    let taken = |reading: Option<u32>| reading.filter(|&r| r != 0);

    if let Some(rate) = taken(record.heart_rate) {
        let value = f64::from(rate);
        if value < config.heart_rate.min {
            alerts.push(VitalAlert::new(VitalKind::HeartRate, AlertSeverity::Low, rate));
        } else if value > config.heart_rate.max {
            alerts.push(VitalAlert::new(VitalKind::HeartRate, AlertSeverity::High, rate));
        }
    }

    if let (Some(sys), Some(dia)) = (
        taken(record.blood_pressure_systolic),
        taken(record.blood_pressure_diastolic),
    ) {
        let limits = &config.blood_pressure;
        let (s, d) = (f64::from(sys), f64::from(dia));
        let reading = format!("{sys}/{dia}");
        if s > limits.high_systolic || d > limits.high_diastolic {
            alerts.push(VitalAlert::new(VitalKind::BloodPressure, AlertSeverity::High, reading));
        } else if s < limits.low_systolic || d < limits.low_diastolic {
            alerts.push(VitalAlert::new(VitalKind::BloodPressure, AlertSeverity::Low, reading));
        }
    }

    if let Some(temp) = record.temperature.filter(|&t| t != 0.0) {
        if temp > config.fever_temperature {
            alerts.push(VitalAlert::new(VitalKind::Temperature, AlertSeverity::Fever, temp));
        } else if temp < config.low_temperature {
            alerts.push(VitalAlert::new(VitalKind::Temperature, AlertSeverity::Low, temp));
        }
    }

    if let Some(spo2) = taken(record.oxygen_saturation) {
        if f64::from(spo2) < config.low_oxygen_saturation {
            alerts.push(VitalAlert::new(VitalKind::OxygenSaturation, AlertSeverity::Low, spo2));
        }
    }

    if !alerts.is_empty() {
        tracing::debug!(date = %record.date, count = alerts.len(), "vital alerts raised");
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_calculate_bmi() {
        assert_eq!(calculate_bmi(Some(70.0), Some(175.0)), Some(22.86));
        assert_eq!(calculate_bmi(Some(70.0), Some(0.0)), None);
        assert_eq!(calculate_bmi(None, Some(175.0)), None);
        assert_eq!(calculate_bmi(Some(0.0), Some(175.0)), None);
    }

    #[test]
    fn test_effective_bmi_prefers_recorded_value() {
        let mut record = VitalsRecord::new(day(1));
        record.weight = Some(70.0);
        record.height = Some(175.0);
        assert_eq!(record.effective_bmi(), Some(22.86));
        record.bmi = Some(22.5);
        assert_eq!(record.effective_bmi(), Some(22.5));
    }

    #[test]
    fn test_normal_vitals_raise_nothing() {
        let record = VitalsRecord {
            heart_rate: Some(72),
            blood_pressure_systolic: Some(120),
            blood_pressure_diastolic: Some(80),
            temperature: Some(98.6),
            oxygen_saturation: Some(98),
            ..VitalsRecord::new(day(1))
        };
        assert!(check_vital_alerts(&record, &AnalyticsConfig::default()).is_empty());
    }

    #[test]
    fn test_abnormal_vitals() {
        let record = VitalsRecord {
            heart_rate: Some(55),
            blood_pressure_systolic: Some(150),
            blood_pressure_diastolic: Some(55),
            temperature: Some(101.2),
            oxygen_saturation: Some(91),
            ..VitalsRecord::new(day(2))
        };
        let alerts = check_vital_alerts(&record, &AnalyticsConfig::default());
        let summary: Vec<_> = alerts.iter().map(|a| (a.vital, a.severity)).collect();
        assert_eq!(
            summary,
            vec![
                (VitalKind::HeartRate, AlertSeverity::Low),
                (VitalKind::BloodPressure, AlertSeverity::High),
                (VitalKind::Temperature, AlertSeverity::Fever),
                (VitalKind::OxygenSaturation, AlertSeverity::Low),
            ]
        );
        assert_eq!(alerts[1].reading, "150/55");
        assert_eq!(alerts[0].to_string(), "Heart Rate is Low (55)");
    }

    #[test]
    fn test_blood_pressure_needs_both_readings() {
        let record = VitalsRecord {
            blood_pressure_systolic: Some(180),
            ..VitalsRecord::new(day(3))
        };
        assert!(check_vital_alerts(&record, &AnalyticsConfig::default()).is_empty());
    }

    #[test]
    fn test_zero_readings_are_not_taken() {
        let record = VitalsRecord {
            heart_rate: Some(0),
            blood_pressure_systolic: Some(0),
            blood_pressure_diastolic: Some(70),
            temperature: Some(0.0),
            oxygen_saturation: Some(0),
            ..VitalsRecord::new(day(4))
        };
        assert!(check_vital_alerts(&record, &AnalyticsConfig::default()).is_empty());

        let record = VitalsRecord {
            heart_rate: Some(0),
            oxygen_saturation: Some(90),
            ..VitalsRecord::new(day(5))
        };
        let alerts = check_vital_alerts(&record, &AnalyticsConfig::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vital, VitalKind::OxygenSaturation);
    }

    #[test]
    fn test_deserialize_portal_json() {
        let record: VitalsRecord = serde_json::from_str(
            r#"{ "date": "2024-01-08", "heart_rate": 75, "blood_pressure_systolic": 118,
                 "blood_pressure_diastolic": 78, "temperature": 98.4, "weight": 69.5, "bmi": 22.3 }"#,
        )
        .unwrap();
        assert_eq!(record.date, day(8));
        assert_eq!(record.heart_rate, Some(75));
        assert_eq!(record.oxygen_saturation, None);
        assert_eq!(record.bmi, Some(22.3));
    }
}
