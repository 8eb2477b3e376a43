use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result as GqlResult};

use crate::modules::planner::adapters::inbound::graphql::{GqlParticipant, to_entity_id};
use crate::modules::planner::core::participant::NewParticipant;
use crate::shell::state::AppState;

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateParticipantInput {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Default)]
pub struct ParticipantMutation;

#[Object]
impl ParticipantMutation {
    async fn create_participant(
        &self,
        context: &Context<'_>,
        data: CreateParticipantInput,
    ) -> GqlResult<GqlParticipant> {
        let state = context.data_unchecked::<AppState>();
        let participant = state
            .create_participant
            .handle(NewParticipant {
                user_id: to_entity_id(data.user_id),
                event_id: to_entity_id(data.event_id),
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(participant.into())
    }
}
