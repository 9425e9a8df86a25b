//! Encounter state: phase, line, and timing fields for the current cast.

use tidecast_core::enums::EncounterPhase;
use tidecast_core::fish::FishDescriptor;
use tidecast_core::types::Timestamp;

/// The single encounter, reset to Idle after every catch, loss, or abort.
#[derive(Debug, Clone)]
pub struct EncounterState {
    pub phase: EncounterPhase,
    /// Generation counter, bumped on every cast.
    pub encounter_id: u64,
    /// Set when the throw starts; re-stamped when the line starts sinking.
    pub cast_started_at: Option<Timestamp>,
    pub throw_progress: f64,
    pub line_depth: f64,
    pub max_depth: f64,
    pub current_fish: Option<FishDescriptor>,
    /// Set once the QTE is won; None while the reel is gated.
    pub reel_started_at: Option<Timestamp>,
    pub reel_initial_depth: f64,
    pub struggle_phase: f64,
}

impl EncounterState {
    pub fn new(max_depth: f64) -> Self {
        Self {
            phase: EncounterPhase::Idle,
            encounter_id: 0,
            cast_started_at: None,
            throw_progress: 0.0,
            line_depth: 0.0,
            max_depth,
            current_fish: None,
            reel_started_at: None,
            reel_initial_depth: 0.0,
            struggle_phase: 0.0,
        }
    }

    /// Back to Idle, keeping the generation counter.
    pub fn reset(&mut self) {
        *self = Self {
            encounter_id: self.encounter_id,
            ..Self::new(self.max_depth)
        };
    }

    /// Start a new encounter at `now`.
    pub fn begin_throw(&mut self, now: Timestamp) {
        self.reset();
        self.encounter_id += 1;
        self.phase = EncounterPhase::Throwing;
        self.cast_started_at = Some(now);
    }

    pub fn reel_engaged(&self) -> bool {
        self.phase == EncounterPhase::Reeling && self.reel_started_at.is_some()
    }

    /// Milliseconds since the phase-local clock was stamped.
    pub fn phase_elapsed(&self, now: Timestamp) -> f64 {
        self.cast_started_at
            .map_or(0.0, |start| now.elapsed_since(start))
    }
}
