use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result as GqlResult};

use crate::modules::planner::adapters::inbound::graphql::{GqlEvent, to_entity_id};
use crate::modules::planner::core::event::NewEvent;
use crate::shell::state::AppState;

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateEventInput {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: ID,
    pub user_id: ID,
}

impl From<CreateEventInput> for NewEvent {
    fn from(input: CreateEventInput) -> Self {
        Self {
            title: input.title,
            desc: input.desc,
            date: input.date,
            from: input.from,
            to: input.to,
            location_id: to_entity_id(input.location_id),
            user_id: to_entity_id(input.user_id),
        }
    }
}

#[derive(Default)]
pub struct EventMutation;

#[Object]
impl EventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        data: CreateEventInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .create_event
            .handle(data.into())
            .await
            .map_err(|e| e.extend())?;
        Ok(event.into())
    }
}
