//! Fish generation for TIDECAST.
//!
//! Weighted rarity and size tables, the species catalog, time-of-day
//! synchronous events, and the seeded catalog generator consumed by the
//! encounter engine at bite time.

pub mod catalog;
pub mod events;
pub mod generator;
pub mod profiles;

pub use generator::{CatalogFishGenerator, FishGenerator};
