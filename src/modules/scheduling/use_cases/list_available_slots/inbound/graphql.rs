use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::scheduling::core::time_slot::TimeSlot;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct SlotView {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl From<TimeSlot> for SlotView {
    fn from(slot: TimeSlot) -> Self {
        Self {
            start_time: slot.start_time(),
            end_time: slot.end_time(),
            duration_minutes: slot.duration_minutes(),
        }
    }
}

#[derive(Default)]
pub struct AvailableSlotsQuery;

#[Object]
impl AvailableSlotsQuery {
    async fn available_slots(
        &self,
        context: &Context<'_>,
        date: NaiveDate,
        duration_minutes: Option<i64>,
        service_id: Option<String>,
    ) -> GqlResult<Vec<SlotView>> {
        let state = context.data_unchecked::<AppState>();
        let duration_minutes = state
            .services
            .resolve_duration(
                duration_minutes,
                service_id.as_deref(),
                state.default_duration_minutes,
            )
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let slots = state
            .engine
            .available_slots(date, duration_minutes)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(slots.into_iter().map(SlotView::from).collect())
    }
}
