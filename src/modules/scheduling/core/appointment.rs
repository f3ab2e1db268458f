// Appointment is the booking handed over to the calendar.
//
// Notes
// - The calendar is the system of record. An Appointment only lives for the request that
//   creates it; afterwards it is read back as a booked interval.
// - end_time is always start_time plus the requested duration.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: String,
    pub customer: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Marks the appointment as stored by the calendar.
    pub fn confirm(self) -> Self {
        Self {
            status: AppointmentStatus::Confirmed,
            ..self
        }
    }
}

/// Read view of a booking found in the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingAppointment {
    pub id: String,
    pub summary: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: String,
}
