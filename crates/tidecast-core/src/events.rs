//! Events emitted by the engine for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Challenge;

/// Encounter events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Line cast; bobber in flight.
    CastStarted { encounter_id: u64 },
    /// Bobber hit the water; line starts sinking.
    LineLanded { encounter_id: u64 },
    /// Line reached the bottom; bite pending.
    BiteScheduled { encounter_id: u64, delay_ms: f64 },
    /// A fish took the bait.
    FishHooked {
        encounter_id: u64,
        fish_type: String,
        rarity: Rarity,
    },
    /// QTE began.
    QteStarted {
        required: u32,
        time_secs: f64,
        modality: InputModality,
    },
    /// A new challenge is on screen.
    ChallengePresented { challenge: Challenge },
    /// A challenge was cleared.
    QteProgress { success_count: u32, required: u32 },
    QteSucceeded,
    QteFailed { success_count: u32, required: u32 },
    /// QTE input listener registered.
    ListenerAttached { modality: InputModality },
    /// QTE input listener removed.
    ListenerDetached { modality: InputModality },
    /// Fish landed and added to the inventory.
    FishCaught {
        fish_type: String,
        rarity: Rarity,
        value: u32,
    },
    /// Line went slack after a lost fish.
    LineSlack { encounter_id: u64 },
    /// Encounter reset by an explicit abort.
    EncounterAborted { encounter_id: u64, phase: EncounterPhase },
    /// A wall-clock gap was replaced by one nominal frame.
    ClockClamped { raw_delta_ms: f64 },
    /// A fish was sold.
    FishSold { fish_type: String, value: u32 },
    /// The buyback slot was repurchased.
    FishBoughtBack { fish_type: String, value: u32 },
}
