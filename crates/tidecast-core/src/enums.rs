//! Enumeration types used throughout the encounter.

use serde::{Deserialize, Serialize};

/// Encounter lifecycle phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterPhase {
    /// No line in the water; ready to cast.
    #[default]
    Idle,
    /// Bobber in flight toward the water.
    Throwing,
    /// Bobber landed, line sinking toward max depth.
    Sinking,
    /// Line at the bottom, bite pending.
    AwaitingBite,
    /// Fish hooked. Reel-in is gated until the QTE succeeds.
    Reeling,
    /// Fish lost; line going slack before returning to Idle.
    Complete,
}

/// Fish rarity tier, ordered from most to least common.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
    Universal,
}

/// Fish size tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    #[default]
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

/// Primary input modality, resolved once at session start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputModality {
    /// Keyboard-driven: key-press challenges.
    #[default]
    Desktop,
    /// Touch-primary: tap-target challenges.
    Touch,
}

/// Time-of-day band that selects the synchronous event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// 05:00–08:59
    Morning,
    /// 09:00–12:59
    #[default]
    Noon,
    /// 13:00–17:59
    Afternoon,
    /// 18:00–04:59
    Night,
}

/// How a QTE activation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QteOutcome {
    Success,
    Failure,
}

/// Inventory ordering for display and selling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventorySort {
    /// Most recently caught first.
    #[default]
    Recent,
    /// Highest value first.
    Value,
    /// Rarest first, ties broken by value.
    Rarity,
}

impl Rarity {
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
        Rarity::Universal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
            Rarity::Universal => "Universal",
        }
    }
}

impl SizeTier {
    pub const ALL: [SizeTier; 5] = [
        SizeTier::Tiny,
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::Huge,
    ];
}

impl TimeOfDay {
    /// Band for a local hour (0–23). Out-of-range hours wrap.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=8 => TimeOfDay::Morning,
            9..=12 => TimeOfDay::Noon,
            13..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Night,
        }
    }
}
