use crate::shared::core::primitives::{EntityId, Record};
use serde::{Deserialize, Serialize};

/// A scheduled event. `location_id` and `user_id` name records in other collections but
/// are never checked against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: EntityId,
    pub user_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: EntityId,
    pub user_id: EntityId,
}

impl Event {
    pub fn create(id: EntityId, data: NewEvent) -> Self {
        Self {
            id,
            title: data.title,
            desc: data.desc,
            date: data.date,
            from: data.from,
            to: data.to,
            location_id: data.location_id,
            user_id: data.user_id,
        }
    }
}

impl Record for Event {
    const KIND: &'static str = "Event";

    fn id(&self) -> &EntityId {
        &self.id
    }
}
