use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::scheduling::core::appointment::UpcomingAppointment;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct UpcomingAppointmentView {
    pub id: String,
    pub summary: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: String,
}

impl From<UpcomingAppointment> for UpcomingAppointmentView {
    fn from(appointment: UpcomingAppointment) -> Self {
        Self {
            id: appointment.id,
            summary: appointment.summary,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
            description: appointment.description,
        }
    }
}

#[derive(Default)]
pub struct UpcomingAppointmentsQuery;

#[Object]
impl UpcomingAppointmentsQuery {
    async fn upcoming_appointments(
        &self,
        context: &Context<'_>,
        customer: String,
    ) -> GqlResult<Vec<UpcomingAppointmentView>> {
        let state = context.data_unchecked::<AppState>();
        let appointments = state
            .guard
            .upcoming_appointments(&customer, Utc::now())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(appointments
            .into_iter()
            .map(UpcomingAppointmentView::from)
            .collect())
    }
}
