// In memory entity store.
//
// Responsibilities
// - Hold the four collections for the lifetime of the process.
// - Serialize writes: each mutation runs its find-and-modify under one write guard.

use crate::modules::planner::adapters::outbound::entity_store::{EntityStore, StoreError};
use crate::modules::planner::adapters::outbound::seed::Seed;
use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::{User, UserPatch};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::collection::Collection;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Collections {
    users: Collection<User>,
    events: Collection<Event>,
    locations: Collection<Location>,
    participants: Collection<Participant>,
}

#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    collections: RwLock<Collections>,
    is_offline: bool,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            collections: RwLock::new(Collections {
                users: Collection::new(seed.users),
                events: Collection::new(seed.events),
                locations: Collection::new(seed.locations),
                participants: Collection::new(seed.participants),
            }),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    async fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entity store offline".into()));
        }
        Ok(self.collections.read().await)
    }

    async fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entity store offline".into()));
        }
        Ok(self.collections.write().await)
    }
}

#[async_trait::async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read().await?.users.all().to_vec())
    }

    async fn find_user(&self, id: &EntityId) -> Result<Option<User>, StoreError> {
        Ok(self.read().await?.users.find(id).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        self.write().await?.users.push(user);
        Ok(())
    }

    async fn update_user(
        &self,
        id: &EntityId,
        patch: UserPatch,
    ) -> Result<Option<User>, StoreError> {
        let mut guard = self.write().await?;
        Ok(guard
            .users
            .replace_with(id, |user| user.merge(patch))
            .cloned())
    }

    async fn remove_user(&self, id: &EntityId) -> Result<Option<User>, StoreError> {
        Ok(self.write().await?.users.remove(id))
    }

    async fn events(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.read().await?.events.all().to_vec())
    }

    async fn find_event(&self, id: &EntityId) -> Result<Option<Event>, StoreError> {
        Ok(self.read().await?.events.find(id).cloned())
    }

    async fn insert_event(&self, event: Event) -> Result<(), StoreError> {
        self.write().await?.events.push(event);
        Ok(())
    }

    async fn locations(&self) -> Result<Vec<Location>, StoreError> {
        Ok(self.read().await?.locations.all().to_vec())
    }

    async fn find_location(&self, id: &EntityId) -> Result<Option<Location>, StoreError> {
        Ok(self.read().await?.locations.find(id).cloned())
    }

    async fn insert_location(&self, location: Location) -> Result<(), StoreError> {
        self.write().await?.locations.push(location);
        Ok(())
    }

    async fn participants(&self) -> Result<Vec<Participant>, StoreError> {
        Ok(self.read().await?.participants.all().to_vec())
    }

    async fn find_participant(&self, id: &EntityId) -> Result<Option<Participant>, StoreError> {
        Ok(self.read().await?.participants.find(id).cloned())
    }

    async fn insert_participant(&self, participant: Participant) -> Result<(), StoreError> {
        self.write().await?.participants.push(participant);
        Ok(())
    }
}
