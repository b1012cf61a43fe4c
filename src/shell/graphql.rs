use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::attendance::use_cases::clock_attendance::inbound::graphql::MutationRoot;
pub use crate::modules::attendance::use_cases::resolve_schedule::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
