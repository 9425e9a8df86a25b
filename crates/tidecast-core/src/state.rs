//! Encounter snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::fish::{FishDescriptor, SyncEvent};
use crate::types::{Challenge, FrameTime};

/// Complete encounter state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: FrameTime,
    pub phase: EncounterPhase,
    pub encounter_id: u64,
    pub line: LineView,
    pub current_fish: Option<FishDescriptor>,
    pub qte: Option<QteView>,
    pub overlay_open: bool,
    pub active_event: Option<SyncEvent>,
    pub session: SessionView,
    pub events: Vec<GameEvent>,
}

/// Line and bobber rendering hints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineView {
    pub depth: f64,
    pub max_depth: f64,
    /// Throw progress in [0, 1]; 1 once the bobber has landed.
    pub throw_progress: f64,
    /// Bobber arc height, `sin(progress * PI)`.
    pub arc_height: f64,
    /// True once the QTE has been won and the line is coming in.
    pub reel_engaged: bool,
    /// Struggle wobble phase (radians).
    pub struggle_phase: f64,
}

/// Live QTE state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QteView {
    pub modality: InputModality,
    pub success_count: u32,
    pub required: u32,
    pub time_remaining: f64,
    pub max_time: f64,
    /// None during the short pause between challenges.
    pub challenge: Option<Challenge>,
}

/// Player economy summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub gold: u64,
    pub fish_count: u32,
    pub inventory: Vec<FishDescriptor>,
    pub sort: InventorySort,
    pub buyback: Option<FishDescriptor>,
}
