use crate::modules::planner::adapters::outbound::entity_store::StoreError;
use crate::shared::core::primitives::{EntityId, Record};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    pub fn not_found<T: Record>(id: &EntityId) -> Self {
        Self::NotFound {
            entity: T::KIND,
            id: id.clone(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Store(_) => "STORE_UNAVAILABLE",
        }
    }
}
