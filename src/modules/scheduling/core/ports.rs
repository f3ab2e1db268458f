// Ports define what the scheduling core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the calendar capability as a trait the engine and the guard code against.
//
// Boundaries
// - No concrete input or output here. Adapters implement CalendarPort in the adapters layer.
//
// Testing guidance
// - Use the in memory calendar for tests and local development.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use thiserror::Error;

use crate::modules::scheduling::core::appointment::Appointment;
use crate::modules::scheduling::core::day_window::local_midnight;
use crate::modules::scheduling::core::time_slot::{TimeSlot, TimeSlotError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("calendar rejected the credentials")]
    Unauthorized,

    #[error("calendar event not found: {0}")]
    NotFound(String),

    #[error("calendar request timed out")]
    Timeout,

    #[error("backend error: {0}")]
    Backend(String),
}

/// Start or end of a calendar event: a timed instant or an all-day date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTime {
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
}

impl EventTime {
    /// All-day dates resolve to local midnight.
    pub fn resolve(&self, time_zone: Tz) -> DateTime<Utc> {
        match self {
            Self::DateTime(instant) => *instant,
            Self::Date(date) => local_midnight(*date, time_zone),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub summary: String,
    pub description: String,
    pub start: EventTime,
    pub end: EventTime,
}

impl CalendarEvent {
    pub fn to_time_slot(&self, time_zone: Tz) -> Result<TimeSlot, TimeSlotError> {
        TimeSlot::new(self.start.resolve(time_zone), self.end.resolve(time_zone))
    }

    /// Case-insensitive substring match, as used to find availability blocks.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.summary.to_uppercase().contains(&keyword.to_uppercase())
    }
}

pub fn appointment_summary(customer: &str) -> String {
    format!("Cita - Cliente {customer}")
}

#[async_trait]
pub trait CalendarPort: Send + Sync {
    /// Events intersecting `[start, end)`, ordered by start.
    async fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;

    /// Same window as `list_events`, limited to events whose summary mentions the availability
    /// keyword.
    async fn list_availability_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;

    async fn create_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<CalendarEvent, CalendarError>;

    async fn delete_event(&self, event_id: &str) -> Result<(), CalendarError>;

    /// Free-text search over events ending after `since`, ordered by start.
    async fn find_events_by_text(
        &self,
        text: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;
}
