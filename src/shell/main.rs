use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use appointments::modules::scheduling::adapters::outbound::google_calendar::GoogleCalendar;
use appointments::modules::scheduling::adapters::outbound::in_memory_calendar::InMemoryCalendar;
use appointments::modules::scheduling::core::ports::CalendarPort;
use appointments::modules::scheduling::core::services::ServiceCatalog;
use appointments::shell::config::AppConfig;
use appointments::shell::http::router;
use appointments::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("appointments=info,tower_http=info")),
        )
        .init();
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "loaded environment file");
    }

    let config = AppConfig::from_env()?;

    let calendar: Arc<dyn CalendarPort> = match config.google_settings() {
        Some(settings) => {
            info!(calendar_id = %settings.calendar_id, "using Google Calendar");
            Arc::new(GoogleCalendar::new(settings)?)
        }
        None => {
            warn!("GOOGLE_CALENDAR_TOKEN is not set, bookings are kept in memory");
            Arc::new(InMemoryCalendar::new(
                config.availability_keyword.clone(),
                config.time_zone,
            ))
        }
    };

    let state = AppState::new(
        calendar,
        &config.availability_keyword,
        config.time_zone,
        ServiceCatalog::default(),
        config.default_duration_minutes,
    );
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        %addr,
        time_zone = %config.time_zone,
        keyword = %config.availability_keyword,
        "appointments API listening, GraphQL at /gql"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
