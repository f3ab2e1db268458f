use crate::modules::scheduling::use_cases::book_appointment::command::BookAppointment;
use crate::tests::fixtures::calendar_events::at;
use chrono::{DateTime, Utc};

pub struct BookAppointmentBuilder {
    inner: BookAppointment,
}

impl Default for BookAppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookAppointmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: BookAppointment {
                customer: "34600111222".to_string(),
                start_time: at(0, 9, 0),
                duration_minutes: 30,
                description: "Corte".to_string(),
                created_at: at(-1, 18, 0),
            },
        }
    }

    pub fn customer(mut self, v: impl Into<String>) -> Self {
        self.inner.customer = v.into();
        self
    }

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn duration_minutes(mut self, v: i64) -> Self {
        self.inner.duration_minutes = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> BookAppointment {
        self.inner
    }
}
