//! Player commands sent from the frontend to the engine.
//!
//! Input commands act immediately on flags; phase transitions they imply are
//! picked up by the next tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::fish::SyncEvent;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Encounter ---
    /// Cast the line. Ignored unless idle with no overlay open.
    Cast,
    /// Raw key press. Space casts outside a QTE; other keys answer challenges.
    KeyPress { key: char },
    /// Pointer-down in percentage screen coordinates.
    Tap { x: f64, y: f64 },
    /// Reset the encounter to idle, dropping any hooked fish.
    Abort,

    // --- UI state ---
    /// Inventory or shop overlay opened or closed.
    SetOverlayOpen { open: bool },
    /// Replace the active synchronous event (None clears it).
    SetActiveEvent { event: Option<SyncEvent> },

    // --- Economy ---
    /// Sell the inventory entry at `index` in the current sort order.
    SellFish { index: usize },
    /// Buy back the most recently sold fish.
    Buyback,
    /// Change the inventory sort order.
    SortInventory { order: InventorySort },
}
