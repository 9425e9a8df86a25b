//! Core types and definitions for the TIDECAST fishing encounter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! timestamps, fish descriptors, commands, events, snapshots, configuration,
//! and tuning constants. It has no dependency on any runtime or renderer.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod fish;
pub mod state;
pub mod types;
