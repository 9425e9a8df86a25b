//! Fish descriptors and synchronous events.

use serde::{Deserialize, Serialize};

use crate::enums::{Rarity, SizeTier, TimeOfDay};

/// A generated fish. Produced by a fish generator at bite time and carried
/// through the QTE and reel phases into the player's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishDescriptor {
    /// Species name, e.g. "Glowfin".
    #[serde(rename = "type")]
    pub fish_type: String,
    pub rarity: Rarity,
    pub size: SizeTier,
    /// Sell value in gold.
    pub value: u32,
    /// Seconds allowed per QTE challenge.
    pub qte_time: f64,
    /// Challenges to clear before the fish can be reeled in.
    pub qte_required: u32,
    /// Body color (CSS hex).
    pub color: String,
    /// Rarity badge color (CSS hex).
    pub rarity_color: String,
    /// True when the species is one of the active event's special fish.
    pub is_event_fish: bool,
}

/// A time-of-day event that boosts certain species and fish value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEvent {
    pub name: String,
    pub description: String,
    pub special_fish: Vec<String>,
    /// Value multiplier applied to every fish caught during the event.
    pub multiplier: f64,
    pub time_of_day: TimeOfDay,
}

impl SyncEvent {
    pub fn features(&self, fish_type: &str) -> bool {
        self.special_fish.iter().any(|name| name == fish_type)
    }
}
