use crate::modules::planner::adapters::outbound::entity_store::EntityStore;
use crate::modules::planner::application::errors::ApplicationError;
use crate::modules::planner::core::event::{Event, NewEvent};
use crate::shared::core::primitives::EntityId;
use std::sync::Arc;

pub struct CreateEventHandler {
    store: Arc<dyn EntityStore>,
}

impl CreateEventHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// `user_id` and `location_id` are stored as given, even when nothing matches them.
    pub async fn handle(&self, data: NewEvent) -> Result<Event, ApplicationError> {
        let event = Event::create(EntityId::generate(), data);
        self.store.insert_event(event.clone()).await?;
        tracing::info!(event_id = %event.id, user_id = %event.user_id, "event created");
        Ok(event)
    }
}
