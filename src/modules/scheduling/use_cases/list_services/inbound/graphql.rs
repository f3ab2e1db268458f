use async_graphql::{Context, Object, SimpleObject};

use crate::modules::scheduling::core::services::Service;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct ServiceView {
    pub id: String,
    pub name: String,
    pub duration_minutes: i64,
}

impl From<&Service> for ServiceView {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            duration_minutes: service.duration_minutes,
        }
    }
}

#[derive(Default)]
pub struct ServicesQuery;

#[Object]
impl ServicesQuery {
    async fn services(&self, context: &Context<'_>) -> Vec<ServiceView> {
        let state = context.data_unchecked::<AppState>();
        state.services.all().iter().map(ServiceView::from).collect()
    }
}
