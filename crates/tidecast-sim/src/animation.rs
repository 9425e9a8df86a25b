//! Time-based line and bobber curves. Rates are per millisecond of game time.

use std::f64::consts::PI;

use tidecast_core::constants::DEPTH_EPSILON;

/// Throw progress in [0, 1].
pub fn throw_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Bobber height bump over the throw.
pub fn arc_height(progress: f64) -> f64 {
    (progress.clamp(0.0, 1.0) * PI).sin()
}

/// Sinking depth after `elapsed_ms`, snapped to `max_depth` when within epsilon.
pub fn sink_depth(elapsed_ms: f64, rate: f64, max_depth: f64) -> f64 {
    let depth = (elapsed_ms.max(0.0) * rate).min(max_depth);
    if max_depth - depth <= DEPTH_EPSILON {
        max_depth
    } else {
        depth
    }
}

/// Reel-in depth `elapsed_ms` after the reel engaged, snapped to 0 when within epsilon.
pub fn reel_depth(initial_depth: f64, rate: f64, elapsed_ms: f64) -> f64 {
    let depth = initial_depth - rate * elapsed_ms.max(0.0);
    if depth <= DEPTH_EPSILON {
        0.0
    } else {
        depth
    }
}

/// One slack step: fixed-rate decay by frame delta.
pub fn slack_depth(depth: f64, rate: f64, delta_ms: f64) -> f64 {
    let next = depth - rate * delta_ms;
    if next <= DEPTH_EPSILON {
        0.0
    } else {
        next
    }
}
