use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const BUNDLED_SEED: &str = include_str!("../../../../../seed/data.json");

/// Initial contents of the entity store. Every collection is optional in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Seed {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("seed document is not valid")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_json(BUNDLED_SEED)
    }
}
