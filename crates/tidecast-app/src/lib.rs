//! TIDECAST host application.
//!
//! This crate wires the encounter engine to a host: a native game-loop
//! thread driven through the functions in [`ipc`], and on `wasm32` a
//! browser bridge that the page drives from `requestAnimationFrame`.

pub mod error;
pub mod game_loop;
pub mod input;
pub mod ipc;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::AppError;
pub use tidecast_core as core;
