// Shared calendar fixtures.
//
// All instants are UTC and relative to a fixed Monday, so tests read as "day N at HH:MM".

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::modules::scheduling::core::ports::{CalendarEvent, EventTime};
use crate::modules::scheduling::core::time_slot::TimeSlot;

pub const AVAILABILITY_KEYWORD: &str = "DISPONIBLE";

pub fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap() + TimeDelta::days(offset)
}

pub fn at(day_offset: i64, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap() + TimeDelta::days(day_offset)
}

pub fn slot(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeSlot {
    TimeSlot::new(start, end).unwrap()
}

pub fn availability_block(start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
    CalendarEventBuilder::new()
        .id(format!("block-{}", start.timestamp()))
        .summary(AVAILABILITY_KEYWORD)
        .between(start, end)
        .build()
}

pub fn booking(start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
    CalendarEventBuilder::new()
        .id(format!("booking-{}", start.timestamp()))
        .summary("Cita - Cliente 34600999888")
        .between(start, end)
        .build()
}

pub struct CalendarEventBuilder {
    inner: CalendarEvent,
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: CalendarEvent {
                id: "event-fixed-0001".to_string(),
                summary: "Reunión".to_string(),
                description: String::new(),
                start: EventTime::DateTime(at(0, 9, 0)),
                end: EventTime::DateTime(at(0, 10, 0)),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn summary(mut self, v: impl Into<String>) -> Self {
        self.inner.summary = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn start(mut self, v: EventTime) -> Self {
        self.inner.start = v;
        self
    }

    pub fn end(mut self, v: EventTime) -> Self {
        self.inner.end = v;
        self
    }

    pub fn between(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start(EventTime::DateTime(start))
            .end(EventTime::DateTime(end))
    }

    pub fn build(self) -> CalendarEvent {
        self.inner
    }
}
