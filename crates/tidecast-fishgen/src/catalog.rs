//! Species catalog, grouped by rarity.

use tidecast_core::enums::Rarity;

/// A catchable species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    pub name: &'static str,
    pub base_value: u32,
    /// Body color (CSS hex).
    pub color: &'static str,
}

const fn species(name: &'static str, base_value: u32, color: &'static str) -> Species {
    Species {
        name,
        base_value,
        color,
    }
}

const COMMON: &[Species] = &[
    species("Glowfin", 10, "#ffff00"),
    species("Sunny Bass", 12, "#ffd700"),
    species("Blue Minnow", 8, "#4169e1"),
    species("Green Guppy", 9, "#32cd32"),
    species("Red Snapper", 11, "#ff6347"),
    species("Silver Scale", 10, "#c0c0c0"),
    species("Pink Puffer", 8, "#ff69b4"),
    species("Teal Trout", 10, "#008080"),
];

const UNCOMMON: &[Species] = &[
    species("Crystal Scale", 15, "#00ffff"),
    species("Shimmer Shad", 18, "#87ceeb"),
    species("Sparkle Sprat", 16, "#ffd700"),
    species("Glimmer Goby", 17, "#e0e0e0"),
    species("Flash Flounder", 18, "#ffff99"),
    species("Radiance Ray", 19, "#ffefd5"),
];

const RARE: &[Species] = &[
    species("Fire Gills", 25, "#ff4500"),
    species("Ice Fin", 22, "#87ceeb"),
    species("Thunder Trout", 24, "#9370db"),
    species("Storm Striper", 23, "#4b0082"),
    species("Blaze Bass", 26, "#ff6347"),
    species("Ember Eel", 24, "#ff8c00"),
];

const EPIC: &[Species] = &[
    species("Shadow Serpent", 35, "#800080"),
    species("Phantom Pike", 32, "#2f4f4f"),
    species("Mystic Ray", 38, "#ff1493"),
    species("Cosmic Carp", 40, "#4b0082"),
    species("Ghost Gar", 35, "#696969"),
];

const LEGENDARY: &[Species] = &[
    species("Dragon Fin", 50, "#ff6347"),
    species("Celestial Bass", 55, "#00ced1"),
    species("Starfish", 52, "#ffd700"),
    species("Titan Tuna", 60, "#ff8c00"),
    species("Phoenix Pike", 54, "#ff4500"),
];

const MYTHICAL: &[Species] = &[
    species("Void Eel", 80, "#191970"),
    species("Ethereal Angelfish", 85, "#da70d6"),
    species("Chronos Carp", 88, "#4b0082"),
    species("Abyssal Angler", 90, "#000033"),
];

const UNIVERSAL: &[Species] = &[
    species("Godfish", 150, "#ff00ff"),
    species("Omega Oarfish", 175, "#9370db"),
    species("Apotheosis Angelfish", 200, "#ff00ff"),
];

/// Species available at a rarity tier. Never empty.
pub fn species_for(rarity: Rarity) -> &'static [Species] {
    match rarity {
        Rarity::Common => COMMON,
        Rarity::Uncommon => UNCOMMON,
        Rarity::Rare => RARE,
        Rarity::Epic => EPIC,
        Rarity::Legendary => LEGENDARY,
        Rarity::Mythical => MYTHICAL,
        Rarity::Universal => UNIVERSAL,
    }
}

/// Every species, most common tier first.
pub fn all_species() -> impl Iterator<Item = &'static Species> {
    Rarity::ALL.into_iter().flat_map(species_for)
}

/// Look up a species by name.
pub fn find(name: &str) -> Option<&'static Species> {
    all_species().find(|s| s.name == name)
}
