use crate::modules::planner::adapters::outbound::entity_store::EntityStore;
use crate::modules::planner::application::errors::ApplicationError;
use crate::modules::planner::core::user::{NewUser, User, UserPatch};
use crate::shared::core::primitives::EntityId;
use std::sync::Arc;

pub struct ManageUsersHandler {
    store: Arc<dyn EntityStore>,
}

impl ManageUsersHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, data: NewUser) -> Result<User, ApplicationError> {
        let user = User::create(EntityId::generate(), data);
        self.store.insert_user(user.clone()).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn update(&self, id: &EntityId, patch: UserPatch) -> Result<User, ApplicationError> {
        match self.store.update_user(id, patch).await? {
            Some(user) => {
                tracing::info!(user_id = %user.id, "user updated");
                Ok(user)
            }
            None => {
                tracing::warn!(user_id = %id, "update of unknown user");
                Err(ApplicationError::not_found::<User>(id))
            }
        }
    }

    /// Removes the user only. Events and participants that reference it are kept.
    pub async fn delete(&self, id: &EntityId) -> Result<User, ApplicationError> {
        match self.store.remove_user(id).await? {
            Some(user) => {
                tracing::info!(user_id = %user.id, "user deleted");
                Ok(user)
            }
            None => {
                tracing::warn!(user_id = %id, "delete of unknown user");
                Err(ApplicationError::not_found::<User>(id))
            }
        }
    }
}
