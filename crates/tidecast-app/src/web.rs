//! Browser bridge.
//!
//! wasm-bindgen cannot export generic structs, so the engine lives in a
//! `thread_local!` and the page drives it through free functions. Snapshots
//! and commands cross the boundary as JSON strings.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use tidecast_core::commands::PlayerCommand;
use tidecast_core::config::EncounterConfig;
use tidecast_core::enums::InputModality;
use tidecast_core::types::Timestamp;
use tidecast_sim::engine::{EncounterEngine, SimConfig};
use tidecast_sim::save::SessionSave;

use crate::input::key_char;

thread_local! {
    static ENGINE: RefCell<Option<EncounterEngine>> = RefCell::new(None);
}

fn with_engine<R>(f: impl FnOnce(&mut EncounterEngine) -> R) -> Result<R, JsValue> {
    ENGINE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(engine) => Ok(f(engine)),
        None => Err(JsValue::from_str("engine not initialized; call tidecast_init() first")),
    })
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Build the engine. `config_json` may be empty for the default tuning.
/// `now` is the page's `performance.now()`.
#[wasm_bindgen]
pub fn tidecast_init(seed: u64, touch: bool, now: f64, config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let encounter = if config_json.trim().is_empty() {
        EncounterConfig::default()
    } else {
        EncounterConfig::from_json_str(config_json).map_err(js_err)?
    };
    let config = SimConfig {
        seed,
        modality: if touch { InputModality::Touch } else { InputModality::Desktop },
        encounter,
        start: Timestamp::from_millis(now),
    };
    let engine = EncounterEngine::new(config).map_err(js_err)?;
    ENGINE.with(|cell| *cell.borrow_mut() = Some(engine));
    log::info!("tidecast: initialized (seed {seed})");
    Ok(())
}

/// Advance to `now` and return the snapshot as JSON.
#[wasm_bindgen]
pub fn tidecast_tick(now: f64) -> Result<String, JsValue> {
    let snapshot = with_engine(|e| e.tick(Timestamp::from_millis(now)))?;
    serde_json::to_string(&snapshot).map_err(js_err)
}

/// Forward a `KeyboardEvent.key` value. Named keys are ignored.
#[wasm_bindgen]
pub fn tidecast_key(key: &str) -> Result<(), JsValue> {
    match key_char(key) {
        Some(c) => with_engine(|e| e.on_key_press(c)),
        None => Ok(()),
    }
}

#[wasm_bindgen]
pub fn tidecast_tap(x: f64, y: f64) -> Result<(), JsValue> {
    with_engine(|e| e.on_tap(x, y))
}

/// Apply a JSON-encoded `PlayerCommand`.
#[wasm_bindgen]
pub fn tidecast_command(command_json: &str) -> Result<(), JsValue> {
    let command: PlayerCommand = serde_json::from_str(command_json).map_err(js_err)?;
    with_engine(|e| e.apply(command))
}

#[wasm_bindgen]
pub fn tidecast_save() -> Result<String, JsValue> {
    let save = with_engine(|e| SessionSave::capture(e.session()))?;
    save.to_json().map_err(js_err)
}

#[wasm_bindgen]
pub fn tidecast_load(save_json: &str) -> Result<(), JsValue> {
    let session = SessionSave::from_json(save_json)
        .and_then(SessionSave::restore)
        .map_err(js_err)?;
    with_engine(|e| *e.session_mut() = session)
}
