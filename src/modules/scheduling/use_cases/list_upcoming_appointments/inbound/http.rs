use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::scheduling::use_cases::book_appointment::inbound::http::status_for;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpcomingAppointmentsParams {
    pub customer: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<UpcomingAppointmentsParams>,
) -> impl IntoResponse {
    match state
        .guard
        .upcoming_appointments(&params.customer, Utc::now())
        .await
    {
        Ok(appointments) => Json(appointments).into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}
