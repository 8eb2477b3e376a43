use crate::modules::planner::adapters::outbound::entity_store::EntityStore;
use crate::modules::planner::application::errors::ApplicationError;
use crate::modules::planner::core::location::{Location, NewLocation};
use crate::shared::core::primitives::EntityId;
use std::sync::Arc;

pub struct CreateLocationHandler {
    store: Arc<dyn EntityStore>,
}

impl CreateLocationHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, data: NewLocation) -> Result<Location, ApplicationError> {
        let location = Location::create(EntityId::generate(), data);
        self.store.insert_location(location.clone()).await?;
        tracing::info!(location_id = %location.id, "location created");
        Ok(location)
    }
}
