use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::scheduling::use_cases::book_appointment::inbound::graphql::BookAppointmentMutation;
use crate::modules::scheduling::use_cases::cancel_appointment::inbound::graphql::CancelAppointmentMutation;
use crate::modules::scheduling::use_cases::list_available_days::inbound::graphql::AvailableDaysQuery;
use crate::modules::scheduling::use_cases::list_available_slots::inbound::graphql::AvailableSlotsQuery;
use crate::modules::scheduling::use_cases::list_services::inbound::graphql::ServicesQuery;
use crate::modules::scheduling::use_cases::list_upcoming_appointments::inbound::graphql::UpcomingAppointmentsQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    AvailableSlotsQuery,
    AvailableDaysQuery,
    UpcomingAppointmentsQuery,
    ServicesQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookAppointmentMutation, CancelAppointmentMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
