//! Fundamental time and screen-space types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point in time on the engine clock, in milliseconds.
///
/// Same scale as `performance.now()`; only differences between timestamps
/// carry meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub f64);

/// Screen-relative point in percentage coordinates.
/// x = 0 is the left edge, y = 0 is the top edge, 100 is the opposite edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Frame bookkeeping carried in every snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Number of ticks that advanced game time.
    pub frame: u64,
    /// Current game time (wall time with anomalous gaps clamped).
    pub now: Timestamp,
    /// Game-time delta applied by the most recent tick (ms).
    pub delta_ms: f64,
}

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);

    pub fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`. Negative if `earlier` is in the future.
    pub fn elapsed_since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }

    /// Timestamp `ms` milliseconds later.
    pub fn offset(self, ms: f64) -> Timestamp {
        Timestamp(self.0 + ms)
    }
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Whether `other` falls inside the axis-aligned box of the given half extent
    /// centered on this point. Edges count as inside.
    pub fn contains_within(&self, other: ScreenPoint, half_extent: f64) -> bool {
        let d = (other.as_vec() - self.as_vec()).abs();
        d.x <= half_extent && d.y <= half_extent
    }
}

impl FrameTime {
    /// Advance by one frame of `delta_ms` game time.
    pub fn advance(&mut self, delta_ms: f64) {
        self.frame += 1;
        self.delta_ms = delta_ms;
        self.now = self.now.offset(delta_ms);
    }
}

/// A single QTE input challenge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Challenge {
    /// Press this key (stored uppercase).
    KeyPress { key: char },
    /// Tap inside the target centered on this point.
    TapTarget { x: f64, y: f64 },
}

impl Challenge {
    /// Whether a key press clears this challenge. Case-insensitive.
    pub fn matches_key(&self, pressed: char) -> bool {
        match self {
            Challenge::KeyPress { key } => key.eq_ignore_ascii_case(&pressed),
            Challenge::TapTarget { .. } => false,
        }
    }

    /// Whether a tap at `point` clears this challenge.
    pub fn matches_tap(&self, point: ScreenPoint, half_extent: f64) -> bool {
        match self {
            Challenge::TapTarget { x, y } => {
                ScreenPoint::new(*x, *y).contains_within(point, half_extent)
            }
            Challenge::KeyPress { .. } => false,
        }
    }
}
