//! Host command handlers.
//!
//! Each function takes the shared `AppState` and bridges one frontend request
//! to the game loop thread via channels. A desktop shell registers these as
//! its command handlers; tests call them directly.

use std::sync::mpsc;
use std::time::Duration;

use tidecast_core::commands::PlayerCommand;
use tidecast_core::state::EncounterSnapshot;
use tidecast_sim::engine::SimConfig;
use tidecast_sim::save::SessionSave;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// How long `save_session` waits for the game loop to answer.
const CAPTURE_TIMEOUT: Duration = Duration::from_secs(1);

/// Start a session. Spawns the game loop thread if not already running.
pub fn start_session(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut running = state.running.lock()?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *state.command_tx.lock()? = Some(cmd_tx);
    *state.loop_handle.lock()? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a player command to the engine.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Latest snapshot, or `None` before the first tick.
///
/// Events are delivered once: the returned snapshot carries every event
/// since the previous poll, and the stored copy is cleared of them.
pub fn get_snapshot(state: &AppState) -> Result<Option<EncounterSnapshot>, AppError> {
    let mut lock = state.latest_snapshot.lock()?;
    let snapshot = lock.clone();
    if let Some(stored) = lock.as_mut() {
        stored.events.clear();
    }
    Ok(snapshot)
}

/// Serialize the player session to the JSON save payload.
pub fn save_session(state: &AppState) -> Result<String, AppError> {
    let (reply_tx, reply_rx) = mpsc::channel();
    send(state, GameLoopCommand::CaptureSession { reply: reply_tx })?;
    let save = reply_rx
        .recv_timeout(CAPTURE_TIMEOUT)
        .map_err(|_| AppError::Timeout)?;
    Ok(save.to_json()?)
}

/// Replace the player session from a JSON save payload.
///
/// The payload is validated on the calling thread; a bad save never reaches the engine.
pub fn load_session(state: &AppState, json: &str) -> Result<(), AppError> {
    let session = SessionSave::from_json(json)?.restore()?;
    send(state, GameLoopCommand::RestoreSession(session))
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_session(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock()?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state.command_tx.lock()?.take() {
        // A loop that already exited has dropped its receiver; nothing to stop.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_handle.lock()?.take() {
        if handle.join().is_err() {
            log::error!("game loop thread panicked");
        }
    }
    *running = false;

    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;

    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}
