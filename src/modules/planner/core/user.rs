use crate::shared::core::primitives::{EntityId, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Fields an update may replace. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn create(id: EntityId, data: NewUser) -> Self {
        Self {
            id,
            username: data.username,
            email: data.email,
        }
    }

    pub fn merge(self, patch: UserPatch) -> Self {
        Self {
            id: self.id,
            username: patch.username.unwrap_or(self.username),
            email: patch.email.unwrap_or(self.email),
        }
    }
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &EntityId {
        &self.id
    }
}
