//! Per-tick systems, run by the engine in a fixed order.

pub mod line;
pub mod snapshot;
