// GraphQL object types for the planner entities.
//
// Type and field names follow the public schema: plural type names, snake_case foreign
// keys. Nested fields (`events`, `users`, `locations`, `participants`) are resolved on
// demand through `PlannerQueries`.

use crate::modules::planner::application::errors::ApplicationError;
use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;
use crate::shared::core::primitives::EntityId;
use crate::shell::state::AppState;
use async_graphql::{
    ComplexObject, Context, ErrorExtensions, ID, Result as GqlResult, SimpleObject,
};

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, extensions| extensions.set("code", self.code()))
    }
}

pub fn to_entity_id(id: ID) -> EntityId {
    EntityId::new(id.0)
}

fn to_gql_id(id: &EntityId) -> ID {
    ID(id.to_string())
}

#[derive(SimpleObject)]
#[graphql(name = "Users", complex)]
pub struct GqlUser {
    pub id: ID,
    pub username: String,
    pub email: String,
    #[graphql(skip)]
    pub record: User,
}

impl From<User> for GqlUser {
    fn from(user: User) -> Self {
        Self {
            id: to_gql_id(&user.id),
            username: user.username.clone(),
            email: user.email.clone(),
            record: user,
        }
    }
}

#[ComplexObject]
impl GqlUser {
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .queries
            .user_events(&self.record)
            .await
            .map_err(|e| e.extend())?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Events", complex, rename_fields = "snake_case")]
pub struct GqlEvent {
    pub id: ID,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: ID,
    pub user_id: ID,
    #[graphql(skip)]
    pub record: Event,
}

impl From<Event> for GqlEvent {
    fn from(event: Event) -> Self {
        Self {
            id: to_gql_id(&event.id),
            title: event.title.clone(),
            desc: event.desc.clone(),
            date: event.date.clone(),
            from: event.from.clone(),
            to: event.to.clone(),
            location_id: to_gql_id(&event.location_id),
            user_id: to_gql_id(&event.user_id),
            record: event,
        }
    }
}

#[ComplexObject]
impl GqlEvent {
    async fn users(&self, context: &Context<'_>) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = &self.record.user_id;
        let owner = state
            .queries
            .event_owner(&self.record)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| ApplicationError::not_found::<User>(owner_id).extend())?;
        Ok(owner.into())
    }

    /// Keyed on the event's `user_id`.
    async fn locations(&self, context: &Context<'_>) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        let owner_id = &self.record.user_id;
        let location = state
            .queries
            .event_location(&self.record)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| ApplicationError::not_found::<Location>(owner_id).extend())?;
        Ok(location.into())
    }

    /// Keyed on the event's `user_id`.
    async fn participants(&self, context: &Context<'_>) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        let participants = state
            .queries
            .event_participants(&self.record)
            .await
            .map_err(|e| e.extend())?;
        Ok(participants.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Locations")]
pub struct GqlLocation {
    pub id: ID,
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<Location> for GqlLocation {
    fn from(location: Location) -> Self {
        Self {
            id: to_gql_id(&location.id),
            name: location.name,
            desc: location.desc,
            lat: location.lat,
            lng: location.lng,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Participants", rename_fields = "snake_case")]
pub struct GqlParticipant {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
}

impl From<Participant> for GqlParticipant {
    fn from(participant: Participant) -> Self {
        Self {
            id: to_gql_id(&participant.id),
            user_id: to_gql_id(&participant.user_id),
            event_id: to_gql_id(&participant.event_id),
        }
    }
}
