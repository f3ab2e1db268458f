use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::scheduling::use_cases::book_appointment::inbound::http::status_for;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> impl IntoResponse {
    match state.guard.cancel_appointment(&appointment_id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(error) => status_for(&error),
    }
}
