//! Virtual game clock.
//!
//! The host passes wall-clock timestamps; the engine runs on game time, which
//! follows the wall clock except that anomalous gaps (negative, non-finite,
//! or longer than the maximum frame gap) count as a single nominal frame.

use tidecast_core::config::EncounterConfig;
use tidecast_core::types::{FrameTime, Timestamp};

/// Result of feeding one wall-clock sample to the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockStep {
    /// Game time advanced by this sample (ms).
    pub delta_ms: f64,
    /// The raw wall delta, if it was replaced by a nominal frame.
    pub clamped_from: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    time: FrameTime,
    last_wall: Timestamp,
    nominal_frame_ms: f64,
    max_gap_ms: f64,
}

impl FrameClock {
    /// Game time starts at `start`, so with a well-behaved host it equals wall time.
    pub fn new(start: Timestamp, config: &EncounterConfig) -> Self {
        Self {
            time: FrameTime {
                frame: 0,
                now: start,
                delta_ms: 0.0,
            },
            last_wall: start,
            nominal_frame_ms: config.nominal_frame_ms,
            max_gap_ms: config.max_frame_gap_ms,
        }
    }

    pub fn advance(&mut self, wall: Timestamp) -> ClockStep {
        let raw = wall.elapsed_since(self.last_wall);
        if wall.as_millis().is_finite() {
            self.last_wall = wall;
        }

        if raw == 0.0 {
            self.time.delta_ms = 0.0;
            return ClockStep {
                delta_ms: 0.0,
                clamped_from: None,
            };
        }

        let anomalous = !raw.is_finite() || raw < 0.0 || raw > self.max_gap_ms;
        let delta_ms = if anomalous { self.nominal_frame_ms } else { raw };
        self.time.advance(delta_ms);
        ClockStep {
            delta_ms,
            clamped_from: anomalous.then_some(raw),
        }
    }

    /// Current game time.
    pub fn now(&self) -> Timestamp {
        self.time.now
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }
}
