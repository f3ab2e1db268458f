use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::scheduling::core::ports::CalendarError;
use crate::modules::scheduling::use_cases::book_appointment::command::BookAppointment;
use crate::modules::scheduling::use_cases::book_appointment::handler::ApplicationError;
use crate::modules::scheduling::use_cases::list_available_slots::handler::AvailabilityError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BookAppointmentBody {
    pub customer: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: Option<i64>,
    pub service_id: Option<String>,
    pub description: Option<String>,
}

/// Status code for a guard failure. Calendar failures are upstream failures.
pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::SlotUnavailable => StatusCode::CONFLICT,
        ApplicationError::InvalidSlot(_)
        | ApplicationError::InvalidCustomer
        | ApplicationError::Availability(AvailabilityError::InvalidDuration(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ApplicationError::CalendarPortFailure(CalendarError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Availability(AvailabilityError::CalendarPortFailure(_))
        | ApplicationError::CalendarPortFailure(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<BookAppointmentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let Ok(service) = state.services.lookup(body.service_id.as_deref()) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let duration_minutes = body
        .duration_minutes
        .or(service.map(|service| service.duration_minutes))
        .unwrap_or(state.default_duration_minutes);
    let description = body
        .description
        .or(service.map(|service| service.name.clone()))
        .unwrap_or_default();

    let command = BookAppointment {
        customer: body.customer,
        start_time: body.start_time,
        duration_minutes,
        description,
        created_at: Utc::now(),
    };

    match state.guard.create_appointment(command).await {
        Ok(appointment) => (StatusCode::CREATED, Json(appointment)).into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}
