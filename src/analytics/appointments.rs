//! Appointment statistics and triage ordering.

use crate::collections::PriorityQueue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency class of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentPriority {
    /// Seen first.
    Emergency,
    /// Seen before normal appointments.
    Urgent,
    /// Routine. Unrecognised priority strings also land here.
    #[serde(other)]
    Normal,
}

impl AppointmentPriority {
    /// Sort rank: emergency 1, urgent 2, normal 3.
    pub fn rank(self) -> u8 {
        match self {
            Self::Emergency => 1,
            Self::Urgent => 2,
            Self::Normal => 3,
        }
    }
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked and not yet held.
    Scheduled,
    /// Held.
    Completed,
    /// Called off.
    Cancelled,
    /// Any other status string.
    #[serde(other)]
    Other,
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Day of the appointment.
    pub date: NaiveDate,
    /// Time slot, `HH:MM`.
    pub time: String,
    /// Doctor's name.
    pub doctor: String,
    /// Urgency class.
    #[serde(default = "default_priority")]
    pub priority: AppointmentPriority,
    /// Lifecycle state.
    pub status: AppointmentStatus,
    /// Reported symptoms.
    #[serde(default)]
    pub symptoms: Option<String>,
}

fn default_priority() -> AppointmentPriority {
    AppointmentPriority::Normal
}

/// Counts of appointments by status.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AppointmentStats {
    /// Completed appointments.
    pub completed: usize,
    /// Scheduled appointments.
    pub scheduled: usize,
    /// Cancelled appointments.
    pub cancelled: usize,
    /// All appointments, whatever their status.
    pub total: usize,
    /// `completed / total` as a percentage; zero when there are none.
    pub completion_rate: f64,
}

impl AppointmentStats {
    /// Tallies `appointments`.
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut stats = Self {
            total: appointments.len(),
            ..Self::default()
        };
        for appointment in appointments {
            match appointment.status {
                AppointmentStatus::Completed => stats.completed += 1,
                AppointmentStatus::Scheduled => stats.scheduled += 1,
                AppointmentStatus::Cancelled => stats.cancelled += 1,
                AppointmentStatus::Other => {}
            }
        }
        if stats.total > 0 {
            #[allow(clippy::cast_precision_loss)]
            let rate = stats.completed as f64 / stats.total as f64 * 100.0;
            stats.completion_rate = rate;
        }
        stats
    }
}

/// Ordering key: day first, then urgency rank, then time slot.
pub type TriageKey = (NaiveDate, u8, String);

/// Scheduled appointments ordered for the front desk.
///
/// Appointments come out by date, then priority (emergency before urgent
/// before normal), then time slot. Only scheduled appointments are admitted.
#[derive(Debug, Default)]
pub struct TriageQueue {
    queue: PriorityQueue<Appointment, TriageKey>,
}

impl TriageQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `appointment` if it is scheduled. Returns whether it was added.
    pub fn admit(&mut self, appointment: Appointment) -> bool {
        if appointment.status != AppointmentStatus::Scheduled {
            tracing::trace!(
                date = %appointment.date,
                status = ?appointment.status,
                "skipping appointment that is not scheduled"
            );
            return false;
        }
        let key = (
            appointment.date,
            appointment.priority.rank(),
            appointment.time.clone(),
        );
        self.queue.enqueue(appointment, key);
        true
    }

    /// The next appointment without removing it.
    pub fn peek(&self) -> Option<&Appointment> {
        self.queue.peek().map(|(appointment, _)| appointment)
    }

    /// Number of queued appointments.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Iterator for TriageQueue {
    type Item = Appointment;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl FromIterator<Appointment> for TriageQueue {
    fn from_iter<I: IntoIterator<Item = Appointment>>(iter: I) -> Self {
        let mut triage = Self::new();
        for appointment in iter {
            triage.admit(appointment);
        }
        triage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(
        day: u32,
        time: &str,
        doctor: &str,
        priority: AppointmentPriority,
        status: AppointmentStatus,
    ) -> Appointment {
        Appointment {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            time: time.to_string(),
            doctor: doctor.to_string(),
            priority,
            status,
            symptoms: None,
        }
    }

    #[test]
    fn test_stats() {
        use AppointmentPriority::Normal;
        use AppointmentStatus::{Cancelled, Completed, Scheduled};
        let appointments = vec![
            appt(1, "09:00", "Dr. Rao", Normal, Completed),
            appt(2, "10:00", "Dr. Rao", Normal, Completed),
            appt(3, "11:00", "Dr. Lee", Normal, Scheduled),
            appt(4, "12:00", "Dr. Lee", Normal, Cancelled),
        ];
        let stats = AppointmentStats::from_appointments(&appointments);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total, 4);
        assert!((stats.completion_rate - 50.0).abs() < f64::EPSILON);

        assert_eq!(AppointmentStats::from_appointments(&[]), AppointmentStats::default());
    }

    #[test]
    fn test_triage_order() {
        use AppointmentPriority::{Emergency, Normal, Urgent};
        use AppointmentStatus::{Completed, Scheduled};
        let triage: TriageQueue = vec![
            appt(5, "09:00", "Cardiology", Normal, Scheduled),
            appt(5, "15:00", "Emergency", Emergency, Scheduled),
            appt(5, "11:00", "Follow-up", Urgent, Scheduled),
            appt(4, "16:00", "Earlier day", Normal, Scheduled),
            appt(5, "08:00", "Follow-up 2", Urgent, Scheduled),
            appt(3, "08:00", "Done", Emergency, Completed),
        ]
        .into_iter()
        .collect();

        assert_eq!(triage.len(), 5);
        assert_eq!(triage.peek().map(|a| a.doctor.as_str()), Some("Earlier day"));
        let order: Vec<_> = triage.map(|a| a.doctor).collect();
        assert_eq!(
            order,
            vec!["Earlier day", "Emergency", "Follow-up 2", "Follow-up", "Cardiology"]
        );
    }

    #[test]
    fn test_unknown_strings_deserialize() {
        let appointment: Appointment = serde_json::from_str(
            r#"{ "date": "2024-03-05", "time": "10:30", "doctor": "Dr. Okafor",
                 "priority": "whenever", "status": "rescheduled" }"#,
        )
        .unwrap();
        assert_eq!(appointment.priority, AppointmentPriority::Normal);
        assert_eq!(appointment.status, AppointmentStatus::Other);
        assert_eq!(appointment.priority.rank(), 3);
        assert!(!TriageQueue::new().admit(appointment));
    }
}
