//! Encounter constants and tuning parameters.
//!
//! Rates are expressed per nominal 60 Hz frame and converted to per-millisecond
//! rates by the engine, so gameplay speed does not depend on frame rate.

/// Duration of one nominal frame (ms).
pub const NOMINAL_FRAME_MS: f64 = 16.67;

/// A wall-clock gap longer than this many nominal frames is treated as a
/// suspended tab and replaced by a single nominal frame.
pub const MAX_FRAME_GAP_FRAMES: f64 = 100.0;

/// Largest wall-clock gap (ms) accepted as a real frame delta.
pub const MAX_FRAME_GAP_MS: f64 = NOMINAL_FRAME_MS * MAX_FRAME_GAP_FRAMES;

/// Host loop rate for the native game-loop thread (Hz).
pub const HOST_TICK_RATE: u32 = 60;

// --- Line ---

/// Default maximum line depth (abstract units).
pub const MAX_DEPTH: f64 = 200.0;

/// Depth within this distance of a bound snaps to the bound.
pub const DEPTH_EPSILON: f64 = 1e-6;

/// Bobber flight time from cast to splash (ms).
pub const THROW_DURATION_MS: f64 = 800.0;

/// Line sink speed (units per nominal frame).
pub const SINK_UNITS_PER_FRAME: f64 = 2.0;

/// Line reel-in speed once the fish is hooked (units per nominal frame).
pub const REEL_UNITS_PER_FRAME: f64 = 3.0;

/// Slack decay after a lost fish: this many units per `SLACK_STEP_MS`.
pub const SLACK_UNITS_PER_STEP: f64 = 3.0;

/// Slack decay step length (ms).
pub const SLACK_STEP_MS: f64 = 16.0;

/// Delay between the line reaching the bottom and the bite (ms).
pub const BITE_DELAY_MS: f64 = 500.0;

/// Struggle animation advance per nominal frame (radians).
pub const STRUGGLE_STEP_PER_FRAME: f64 = 0.3;

// --- QTE ---

/// Countdown cadence (ms of game time per decrement).
pub const QTE_COUNTDOWN_STEP_MS: f64 = 100.0;

/// Seconds removed from the QTE timer per countdown step.
pub const QTE_COUNTDOWN_STEP_SECS: f64 = 0.1;

/// Pause between a cleared challenge and the next prompt (ms).
pub const QTE_REPROMPT_DELAY_MS: f64 = 200.0;

/// Remaining time at or below this is treated as expired (seconds).
pub const QTE_TIME_EPSILON: f64 = 1e-9;

/// Keys sampled for desktop challenges.
pub const QTE_KEYS: [char; 8] = ['A', 'S', 'D', 'W', 'E', 'Q', 'R', 'F'];

/// Percentage positions sampled for touch challenges: corners, edges, center column.
pub const QTE_TAP_POSITIONS: [(f64, f64); 6] = [
    (20.0, 30.0),
    (80.0, 30.0),
    (20.0, 70.0),
    (80.0, 70.0),
    (50.0, 20.0),
    (50.0, 80.0),
];

/// Half extent of a rendered tap target (percentage points).
pub const TAP_TARGET_HALF_EXTENT: f64 = 8.0;

// --- Fish generation ---

/// Chance that a bite during a synchronous event is one of the event's special fish.
pub const EVENT_FISH_CHANCE: f64 = 0.3;

/// Default RNG seed when none is configured.
pub const DEFAULT_SEED: u64 = 42;
