use crate::modules::planner::adapters::outbound::entity_store::EntityStore;
use crate::modules::planner::application::errors::ApplicationError;
use crate::modules::planner::core::participant::{NewParticipant, Participant};
use crate::shared::core::primitives::EntityId;
use std::sync::Arc;

pub struct CreateParticipantHandler {
    store: Arc<dyn EntityStore>,
}

impl CreateParticipantHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, data: NewParticipant) -> Result<Participant, ApplicationError> {
        let participant = Participant::create(EntityId::generate(), data);
        self.store.insert_participant(participant.clone()).await?;
        tracing::info!(
            participant_id = %participant.id,
            user_id = %participant.user_id,
            event_id = %participant.event_id,
            "participant created"
        );
        Ok(participant)
    }
}
