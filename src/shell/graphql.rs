use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::planner::use_cases::browse_planner::inbound::graphql::QueryRoot;
use crate::modules::planner::use_cases::create_event::inbound::graphql::EventMutation;
use crate::modules::planner::use_cases::create_location::inbound::graphql::LocationMutation;
use crate::modules::planner::use_cases::create_participant::inbound::graphql::ParticipantMutation;
use crate::modules::planner::use_cases::manage_users::inbound::graphql::UserMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(
    UserMutation,
    EventMutation,
    LocationMutation,
    ParticipantMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
