//! Encounter engine for TIDECAST.
//!
//! Drives the cast → sink → bite → QTE → reel state machine on a virtual
//! game clock, owns the player session, and produces `EncounterSnapshot`s
//! for the frontend.

pub mod animation;
pub mod clock;
pub mod encounter;
pub mod engine;
pub mod notifier;
pub mod save;
pub mod scheduler;
pub mod session;
pub mod systems;

pub use engine::{EncounterEngine, SimConfig};
pub use tidecast_core as core;
