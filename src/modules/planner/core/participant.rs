use crate::shared::core::primitives::{EntityId, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: EntityId,
    pub user_id: EntityId,
    pub event_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub user_id: EntityId,
    pub event_id: EntityId,
}

impl Participant {
    pub fn create(id: EntityId, data: NewParticipant) -> Self {
        Self {
            id,
            user_id: data.user_id,
            event_id: data.event_id,
        }
    }
}

impl Record for Participant {
    const KIND: &'static str = "Participant";

    fn id(&self) -> &EntityId {
        &self.id
    }
}
