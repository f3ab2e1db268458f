use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::shell::state::AppState;

#[derive(Default)]
pub struct AvailableDaysQuery;

#[Object]
impl AvailableDaysQuery {
    async fn available_days(
        &self,
        context: &Context<'_>,
        start_date: NaiveDate,
        #[graphql(default = 3)] count: u32,
        duration_minutes: Option<i64>,
        service_id: Option<String>,
    ) -> GqlResult<Vec<NaiveDate>> {
        let state = context.data_unchecked::<AppState>();
        let duration_minutes = state
            .services
            .resolve_duration(
                duration_minutes,
                service_id.as_deref(),
                state.default_duration_minutes,
            )
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        state
            .engine
            .next_available_days(start_date, count as usize, duration_minutes)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
