// Identifier and record primitives shared by every entity collection.
//
// Ids are opaque string tokens compared with exact equality. Seed documents and GraphQL
// inputs may carry numeric ids; they are normalized to their decimal string form here,
// at the conversion boundary, and nowhere else.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// A fresh, collision-free id for a newly created record.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => EntityId(text),
            RawId::Signed(number) => EntityId(number.to_string()),
            RawId::Unsigned(number) => EntityId(number.to_string()),
        })
    }
}

/// A record stored in an entity collection, addressable by its id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Name used in logs and NotFound errors.
    const KIND: &'static str;

    fn id(&self) -> &EntityId;
}
