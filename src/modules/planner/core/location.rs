use crate::shared::core::primitives::{EntityId, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn create(id: EntityId, data: NewLocation) -> Self {
        Self {
            id,
            name: data.name,
            desc: data.desc,
            lat: data.lat,
            lng: data.lng,
        }
    }
}

impl Record for Location {
    const KIND: &'static str = "Location";

    fn id(&self) -> &EntityId {
        &self.id
    }
}
