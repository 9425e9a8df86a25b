//! Session save payload, in the JSON shape the user-data endpoint stores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tidecast_core::fish::FishDescriptor;

use crate::session::PlayerSession;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to encode save: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode save: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("save claims {fish_count} catches but holds {inventory} fish")]
    Inconsistent { fish_count: u32, inventory: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSave {
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub fish_count: u32,
    #[serde(default)]
    pub inventory: Vec<FishDescriptor>,
}

impl SessionSave {
    pub fn capture(session: &PlayerSession) -> Self {
        Self {
            gold: session.gold,
            fish_count: session.fish_count,
            inventory: session.inventory.clone(),
        }
    }

    /// Rebuild a session. Sort order and buyback are not persisted.
    pub fn restore(self) -> Result<PlayerSession, SaveError> {
        // Sold fish leave the inventory, so the count can only exceed it.
        if (self.fish_count as usize) < self.inventory.len() {
            return Err(SaveError::Inconsistent {
                fish_count: self.fish_count,
                inventory: self.inventory.len(),
            });
        }
        let mut session = PlayerSession::new();
        session.gold = self.gold;
        session.fish_count = self.fish_count;
        session.inventory = self.inventory;
        Ok(session)
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        serde_json::to_string(self).map_err(SaveError::Encode)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        serde_json::from_str(json).map_err(SaveError::Decode)
    }
}
