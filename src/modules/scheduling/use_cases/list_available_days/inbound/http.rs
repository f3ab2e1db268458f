use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::scheduling::use_cases::list_available_slots::handler::AvailabilityError;
use crate::shell::state::AppState;

const DEFAULT_DAY_COUNT: usize = 3;

#[derive(Deserialize)]
pub struct AvailableDaysParams {
    pub start_date: NaiveDate,
    pub count: Option<usize>,
    pub duration_minutes: Option<i64>,
    pub service_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AvailableDaysParams>,
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
        .next_available_days(
            params.start_date,
            params.count.unwrap_or(DEFAULT_DAY_COUNT),
            duration_minutes,
        )
        .await
    {
        Ok(days) => Json(days).into_response(),
        Err(AvailabilityError::InvalidDuration(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
        Err(AvailabilityError::CalendarPortFailure(_)) => StatusCode::BAD_GATEWAY.into_response(),
    }
}
