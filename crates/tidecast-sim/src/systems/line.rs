//! Line systems: throw, sink, reel-in, and slack.
//!
//! Each function evaluates one phase and applies at most one transition.

use tidecast_core::config::EncounterConfig;
use tidecast_core::enums::EncounterPhase;
use tidecast_core::types::Timestamp;

use crate::animation;
use crate::encounter::EncounterState;

/// Transition applied by a line system this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineUpdate {
    Unchanged,
    /// Throwing → Sinking.
    Landed,
    /// Sinking → AwaitingBite.
    ReachedBottom,
    /// Line fully reeled in; the fish is landed.
    ReeledIn,
    /// Complete → Idle.
    Settled,
}

pub fn run_throw(state: &mut EncounterState, config: &EncounterConfig, now: Timestamp) -> LineUpdate {
    let elapsed = state.phase_elapsed(now);
    state.throw_progress = animation::throw_progress(elapsed, config.throw_duration_ms);
    if elapsed / config.throw_duration_ms < 1.0 {
        return LineUpdate::Unchanged;
    }
    state.phase = EncounterPhase::Sinking;
    state.cast_started_at = Some(now);
    state.line_depth = 0.0;
    LineUpdate::Landed
}

pub fn run_sink(state: &mut EncounterState, config: &EncounterConfig, now: Timestamp) -> LineUpdate {
    let elapsed = state.phase_elapsed(now);
    state.line_depth = animation::sink_depth(elapsed, config.sink_rate(), state.max_depth);
    if state.line_depth < state.max_depth {
        return LineUpdate::Unchanged;
    }
    state.phase = EncounterPhase::AwaitingBite;
    LineUpdate::ReachedBottom
}

/// Reel-in once engaged. Does nothing while the reel is gated.
pub fn run_reel(
    state: &mut EncounterState,
    config: &EncounterConfig,
    now: Timestamp,
    delta_ms: f64,
) -> LineUpdate {
    let Some(started) = state.reel_started_at else {
        return LineUpdate::Unchanged;
    };
    state.line_depth = animation::reel_depth(
        state.reel_initial_depth,
        config.reel_rate(),
        now.elapsed_since(started),
    );
    if state.current_fish.is_some() {
        state.struggle_phase +=
            config.struggle_step_per_frame * delta_ms / config.nominal_frame_ms;
    }
    if state.line_depth > 0.0 {
        return LineUpdate::Unchanged;
    }
    LineUpdate::ReeledIn
}

pub fn run_slack(state: &mut EncounterState, config: &EncounterConfig, delta_ms: f64) -> LineUpdate {
    state.line_depth = animation::slack_depth(state.line_depth, config.slack_rate(), delta_ms);
    if state.line_depth > 0.0 {
        return LineUpdate::Unchanged;
    }
    state.reset();
    LineUpdate::Settled
}
