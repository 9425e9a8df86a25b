//! Rarity and size tier profiles.
//!
//! Consolidates the per-tier parameters used when rolling a fish.

use tidecast_core::enums::{Rarity, SizeTier};

/// Spawn weight, value scaling, and QTE difficulty for a rarity tier.
pub struct RarityProfile {
    /// Relative spawn weight.
    pub chance: f64,
    /// Value multiplier applied to the species base value.
    pub multiplier: f64,
    /// Badge color (CSS hex).
    pub color: &'static str,
    /// Seconds allowed per challenge.
    pub qte_time: f64,
    /// Challenges to clear.
    pub qte_required: u32,
}

/// Spawn weight and value scaling for a size tier.
pub struct SizeProfile {
    pub chance: f64,
    pub multiplier: f64,
}

/// Get the profile for a given rarity.
pub fn rarity_profile(rarity: Rarity) -> RarityProfile {
    match rarity {
        Rarity::Common => RarityProfile {
            chance: 0.5,
            multiplier: 1.0,
            color: "#95a5a6",
            qte_time: 1.5,
            qte_required: 3,
        },
        Rarity::Uncommon => RarityProfile {
            chance: 0.3,
            multiplier: 1.5,
            color: "#2ecc71",
            qte_time: 1.25,
            qte_required: 4,
        },
        Rarity::Rare => RarityProfile {
            chance: 0.15,
            multiplier: 2.5,
            color: "#3498db",
            qte_time: 1.0,
            qte_required: 5,
        },
        Rarity::Epic => RarityProfile {
            chance: 0.04,
            multiplier: 4.0,
            color: "#9b59b6",
            qte_time: 0.9,
            qte_required: 6,
        },
        Rarity::Legendary => RarityProfile {
            chance: 0.01,
            multiplier: 7.0,
            color: "#f39c12",
            qte_time: 0.9,
            qte_required: 10,
        },
        Rarity::Mythical => RarityProfile {
            chance: 0.005,
            multiplier: 12.0,
            color: "#e74c3c",
            qte_time: 0.9,
            qte_required: 20,
        },
        Rarity::Universal => RarityProfile {
            chance: 0.001,
            multiplier: 20.0,
            color: "#ff00ff",
            qte_time: 0.9,
            qte_required: 50,
        },
    }
}

/// Get the profile for a given size.
pub fn size_profile(size: SizeTier) -> SizeProfile {
    match size {
        SizeTier::Tiny => SizeProfile {
            chance: 0.3,
            multiplier: 0.5,
        },
        SizeTier::Small => SizeProfile {
            chance: 0.25,
            multiplier: 0.75,
        },
        SizeTier::Medium => SizeProfile {
            chance: 0.25,
            multiplier: 1.0,
        },
        SizeTier::Large => SizeProfile {
            chance: 0.15,
            multiplier: 1.5,
        },
        SizeTier::Huge => SizeProfile {
            chance: 0.05,
            multiplier: 2.5,
        },
    }
}
