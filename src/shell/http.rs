use axum::{
    Extension, Json, Router,
    response::IntoResponse,
    routing::{delete, get},
};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::scheduling::use_cases::book_appointment::inbound::http as book_http;
use crate::modules::scheduling::use_cases::cancel_appointment::inbound::http as cancel_http;
use crate::modules::scheduling::use_cases::list_available_days::inbound::http as days_http;
use crate::modules::scheduling::use_cases::list_available_slots::inbound::http as slots_http;
use crate::modules::scheduling::use_cases::list_services::inbound::http as services_http;
use crate::modules::scheduling::use_cases::list_upcoming_appointments::inbound::http as upcoming_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/services", get(services_http::handle))
        .route("/available-slots", get(slots_http::handle))
        .route("/available-days", get(days_http::handle))
        .route(
            "/appointments",
            get(upcoming_http::handle).post(book_http::handle),
        )
        .route("/appointments/{id}", delete(cancel_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "timestamp": Utc::now() }))
}
