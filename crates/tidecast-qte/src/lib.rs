//! Quick-time events for TIDECAST.
//!
//! A QTE is a timed run of input challenges the player must clear before a
//! hooked fish can be reeled in. Plain data driven by game timestamps; no
//! timers of its own.

pub mod challenge;
pub mod controller;
pub mod listeners;
pub mod session;

pub use controller::QteController;
pub use tidecast_core as core;

#[cfg(test)]
mod tests;
