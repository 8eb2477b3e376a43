use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::planner::adapters::inbound::graphql::{
    GqlEvent, GqlLocation, GqlParticipant, GqlUser, to_entity_id,
};
use crate::modules::planner::application::errors::ApplicationError;
use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn users(&self, context: &Context<'_>) -> GqlResult<Vec<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        let users = state.queries.users().await.map_err(|e| e.extend())?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn user(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let id = to_entity_id(id);
        let user = state
            .queries
            .user(&id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| ApplicationError::not_found::<User>(&id).extend())?;
        Ok(user.into())
    }

    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state.queries.events().await.map_err(|e| e.extend())?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let id = to_entity_id(id);
        let event = state
            .queries
            .event(&id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| ApplicationError::not_found::<Event>(&id).extend())?;
        Ok(event.into())
    }

    async fn locations(&self, context: &Context<'_>) -> GqlResult<Vec<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        let locations = state.queries.locations().await.map_err(|e| e.extend())?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    async fn location(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        let id = to_entity_id(id);
        let location = state
            .queries
            .location(&id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| ApplicationError::not_found::<Location>(&id).extend())?;
        Ok(location.into())
    }

    async fn participants(&self, context: &Context<'_>) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        let participants = state.queries.participants().await.map_err(|e| e.extend())?;
        Ok(participants.into_iter().map(Into::into).collect())
    }

    async fn participant(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlParticipant> {
        let state = context.data_unchecked::<AppState>();
        let id = to_entity_id(id);
        let participant = state
            .queries
            .participant(&id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| ApplicationError::not_found::<Participant>(&id).extend())?;
        Ok(participant.into())
    }
}
