use crate::modules::scheduling::adapters::outbound::in_memory_calendar::InMemoryCalendar;
use crate::modules::scheduling::core::services::ServiceCatalog;
use crate::shell::state::AppState;
use crate::tests::fixtures::calendar_events::{AVAILABILITY_KEYWORD, at, availability_block};
use chrono_tz::UTC;
use std::sync::Arc;

pub const DEFAULT_DURATION_MINUTES: i64 = 30;

pub fn make_test_state(calendar: Arc<InMemoryCalendar>) -> AppState {
    AppState::new(
        calendar,
        AVAILABILITY_KEYWORD,
        UTC,
        ServiceCatalog::default(),
        DEFAULT_DURATION_MINUTES,
    )
}

/// Calendar open on day 0 from 09:00 to 11:00 and from 16:00 to 17:00 UTC.
pub async fn seeded_calendar() -> Arc<InMemoryCalendar> {
    let calendar = InMemoryCalendar::new(AVAILABILITY_KEYWORD, UTC);
    calendar.insert(availability_block(at(0, 9, 0), at(0, 11, 0))).await;
    calendar.insert(availability_block(at(0, 16, 0), at(0, 17, 0))).await;
    Arc::new(calendar)
}

pub fn offline_calendar() -> Arc<InMemoryCalendar> {
    let mut calendar = InMemoryCalendar::new(AVAILABILITY_KEYWORD, UTC);
    calendar.toggle_offline();
    Arc::new(calendar)
}
