// Port for the entity store.
//
// Handlers code against this trait; `entity_store_in_memory` is the only backend.
// Reads hand out clones so no caller holds on to stored records.

use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::{User, UserPatch};
use crate::shared::core::primitives::EntityId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn users(&self) -> Result<Vec<User>, StoreError>;
    async fn find_user(&self, id: &EntityId) -> Result<Option<User>, StoreError>;
    async fn insert_user(&self, user: User) -> Result<(), StoreError>;
    /// Merges `patch` into the stored user; `None` when no user has `id`.
    async fn update_user(
        &self,
        id: &EntityId,
        patch: UserPatch,
    ) -> Result<Option<User>, StoreError>;
    /// Removes and returns the user; `None` (and no removal) when no user has `id`.
    async fn remove_user(&self, id: &EntityId) -> Result<Option<User>, StoreError>;

    async fn events(&self) -> Result<Vec<Event>, StoreError>;
    async fn find_event(&self, id: &EntityId) -> Result<Option<Event>, StoreError>;
    async fn insert_event(&self, event: Event) -> Result<(), StoreError>;

    async fn locations(&self) -> Result<Vec<Location>, StoreError>;
    async fn find_location(&self, id: &EntityId) -> Result<Option<Location>, StoreError>;
    async fn insert_location(&self, location: Location) -> Result<(), StoreError>;

    async fn participants(&self) -> Result<Vec<Participant>, StoreError>;
    async fn find_participant(&self, id: &EntityId) -> Result<Option<Participant>, StoreError>;
    async fn insert_participant(&self, participant: Participant) -> Result<(), StoreError>;
}
