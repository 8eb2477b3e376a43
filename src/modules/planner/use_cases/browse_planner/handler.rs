// Read side: list and lookup queries plus relationship resolution for nested fields.

use crate::modules::planner::adapters::outbound::entity_store::EntityStore;
use crate::modules::planner::application::errors::ApplicationError;
use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::relations;
use crate::modules::planner::core::user::User;
use crate::shared::core::primitives::EntityId;
use std::sync::Arc;

pub struct PlannerQueries {
    store: Arc<dyn EntityStore>,
}

impl PlannerQueries {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn users(&self) -> Result<Vec<User>, ApplicationError> {
        Ok(self.store.users().await?)
    }

    pub async fn user(&self, id: &EntityId) -> Result<Option<User>, ApplicationError> {
        Ok(self.store.find_user(id).await?)
    }

    pub async fn events(&self) -> Result<Vec<Event>, ApplicationError> {
        Ok(self.store.events().await?)
    }

    pub async fn event(&self, id: &EntityId) -> Result<Option<Event>, ApplicationError> {
        Ok(self.store.find_event(id).await?)
    }

    pub async fn locations(&self) -> Result<Vec<Location>, ApplicationError> {
        Ok(self.store.locations().await?)
    }

    pub async fn location(&self, id: &EntityId) -> Result<Option<Location>, ApplicationError> {
        Ok(self.store.find_location(id).await?)
    }

    pub async fn participants(&self) -> Result<Vec<Participant>, ApplicationError> {
        Ok(self.store.participants().await?)
    }

    pub async fn participant(
        &self,
        id: &EntityId,
    ) -> Result<Option<Participant>, ApplicationError> {
        Ok(self.store.find_participant(id).await?)
    }

    pub async fn user_events(&self, user: &User) -> Result<Vec<Event>, ApplicationError> {
        let events = self.store.events().await?;
        Ok(relations::user_events(user, &events))
    }

    pub async fn event_owner(&self, event: &Event) -> Result<Option<User>, ApplicationError> {
        let users = self.store.users().await?;
        Ok(relations::event_owner(event, &users))
    }

    pub async fn event_location(
        &self,
        event: &Event,
    ) -> Result<Option<Location>, ApplicationError> {
        let locations = self.store.locations().await?;
        Ok(relations::event_location(event, &locations))
    }

    pub async fn event_participants(
        &self,
        event: &Event,
    ) -> Result<Vec<Participant>, ApplicationError> {
        let participants = self.store.participants().await?;
        Ok(relations::event_participants(event, &participants))
    }
}
