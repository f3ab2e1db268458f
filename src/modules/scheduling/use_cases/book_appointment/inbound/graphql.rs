use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::scheduling::core::appointment::{Appointment, AppointmentStatus};
use crate::modules::scheduling::use_cases::book_appointment::command::BookAppointment;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "AppointmentStatus")]
pub enum AppointmentStatusView {
    Pending,
    Confirmed,
    Cancelled,
}

impl From<AppointmentStatus> for AppointmentStatusView {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => Self::Pending,
            AppointmentStatus::Confirmed => Self::Confirmed,
            AppointmentStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Appointment")]
pub struct AppointmentView {
    pub id: ID,
    pub customer: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatusView,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: ID(appointment.id),
            customer: appointment.customer,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
            status: appointment.status.into(),
            description: appointment.description,
            created_at: appointment.created_at,
        }
    }
}

#[derive(Default)]
pub struct BookAppointmentMutation;

#[Object]
impl BookAppointmentMutation {
    async fn create_appointment(
        &self,
        context: &Context<'_>,
        customer: String,
        start_time: DateTime<Utc>,
        duration_minutes: Option<i64>,
        service_id: Option<String>,
        description: Option<String>,
    ) -> GqlResult<AppointmentView> {
        let state = context.data_unchecked::<AppState>();
        let service = state
            .services
            .lookup(service_id.as_deref())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let command = BookAppointment {
            customer,
            start_time,
            duration_minutes: duration_minutes
                .or(service.map(|service| service.duration_minutes))
                .unwrap_or(state.default_duration_minutes),
            description: description
                .or(service.map(|service| service.name.clone()))
                .unwrap_or_default(),
            created_at: Utc::now(),
        };

        let appointment = state
            .guard
            .create_appointment(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(appointment.into())
    }
}
