// In memory implementation of the CalendarPort.
//
// Purpose
// - Support engine and guard tests and local development without a calendar provider.
//
// Responsibilities
// - Store events in memory, ordered by start on every read.
// - Apply the same window and keyword semantics as the remote calendar.

use crate::modules::scheduling::core::appointment::Appointment;
use crate::modules::scheduling::core::ports::{
    CalendarError, CalendarEvent, CalendarPort, EventTime, appointment_summary,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryCalendar {
    events: RwLock<Vec<CalendarEvent>>,
    availability_keyword: String,
    time_zone: Tz,
    is_offline: bool,
    delay_create_ms: AtomicU64,
}

impl InMemoryCalendar {
    pub fn new(availability_keyword: impl Into<String>, time_zone: Tz) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            availability_keyword: availability_keyword.into(),
            time_zone,
            is_offline: false,
            delay_create_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_create_ms(&self, ms: u64) {
        self.delay_create_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn insert(&self, event: CalendarEvent) {
        self.events.write().await.push(event);
    }

    pub async fn events(&self) -> Vec<CalendarEvent> {
        self.events.read().await.clone()
    }

    fn ensure_online(&self) -> Result<(), CalendarError> {
        if self.is_offline {
            return Err(CalendarError::Backend("Calendar offline".into()));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(&CalendarEvent) -> bool) -> Vec<CalendarEvent> {
        let guard = self.events.read().await;
        let mut selected: Vec<CalendarEvent> =
            guard.iter().filter(|event| keep(event)).cloned().collect();
        selected.sort_by_key(|event| event.start.resolve(self.time_zone));
        selected
    }

    fn intersects(&self, event: &CalendarEvent, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        event.end.resolve(self.time_zone) > start && event.start.resolve(self.time_zone) < end
    }
}

#[async_trait::async_trait]
impl CalendarPort for InMemoryCalendar {
    async fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.ensure_online()?;
        Ok(self.select(|event| self.intersects(event, start, end)).await)
    }

    async fn list_availability_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.ensure_online()?;
        Ok(self
            .select(|event| {
                self.intersects(event, start, end) && event.mentions(&self.availability_keyword)
            })
            .await)
    }

    async fn create_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<CalendarEvent, CalendarError> {
        self.ensure_online()?;
        let delay = self.delay_create_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let event = CalendarEvent {
            id: appointment.id.clone(),
            summary: appointment_summary(&appointment.customer),
            description: appointment.description.clone(),
            start: EventTime::DateTime(appointment.start_time),
            end: EventTime::DateTime(appointment.end_time),
        };
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn delete_event(&self, event_id: &str) -> Result<(), CalendarError> {
        self.ensure_online()?;
        let mut guard = self.events.write().await;
        let before = guard.len();
        guard.retain(|event| event.id != event_id);
        if guard.len() == before {
            return Err(CalendarError::NotFound(event_id.to_string()));
        }
        Ok(())
    }

    async fn find_events_by_text(
        &self,
        text: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.ensure_online()?;
        let needle = text.to_lowercase();
        Ok(self
            .select(|event| {
                event.end.resolve(self.time_zone) > since
                    && (event.summary.to_lowercase().contains(&needle)
                        || event.description.to_lowercase().contains(&needle))
            })
            .await)
    }
}
