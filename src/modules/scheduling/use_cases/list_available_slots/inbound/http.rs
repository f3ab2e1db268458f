use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::scheduling::core::day_period::DayPeriod;
use crate::modules::scheduling::use_cases::list_available_slots::handler::AvailabilityError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AvailableSlotsParams {
    pub date: NaiveDate,
    pub duration_minutes: Option<i64>,
    pub service_id: Option<String>,
    pub period: Option<DayPeriod>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AvailableSlotsParams>,
) -> impl IntoResponse {
    let Ok(duration_minutes) = state.services.resolve_duration(
        params.duration_minutes,
        params.service_id.as_deref(),
        state.default_duration_minutes,
    ) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state
        .engine
        .available_slots(params.date, duration_minutes)
        .await
    {
        Ok(slots) => {
            let slots = match params.period {
                Some(period) => period.retain(slots, state.engine.time_zone()),
                None => slots,
            };
            Json(slots).into_response()
        }
        Err(AvailabilityError::InvalidDuration(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
        Err(AvailabilityError::CalendarPortFailure(_)) => StatusCode::BAD_GATEWAY.into_response(),
    }
}
