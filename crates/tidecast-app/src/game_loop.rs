//! Game loop thread: runs the encounter engine at 60Hz and publishes snapshots.
//!
//! The engine is built by the caller (so config errors surface before any
//! thread exists) and moved into the loop thread, which owns it from then on.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tidecast_core::constants::HOST_TICK_RATE;
use tidecast_core::state::EncounterSnapshot;
use tidecast_core::types::Timestamp;
use tidecast_sim::engine::{EncounterEngine, SimConfig};
use tidecast_sim::save::SessionSave;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Nominal duration of one host tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / HOST_TICK_RATE as u64);

/// Validates `config`, builds the engine, and spawns the game loop thread.
///
/// Returns the command sender for the IPC layer and the thread's join handle.
pub fn spawn_game_loop(
    mut config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    // The loop reports time relative to its own start.
    config.start = Timestamp::ZERO;
    let engine = EncounterEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tidecast-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: EncounterEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<EncounterSnapshot>>,
) {
    let origin = Instant::now();
    let mut next_tick_time = origin;
    log::info!("game loop started at {HOST_TICK_RATE} Hz");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.apply(cmd),
                Ok(GameLoopCommand::CaptureSession { reply }) => {
                    // The requester may have given up waiting.
                    let _ = reply.send(SessionSave::capture(engine.session()));
                }
                Ok(GameLoopCommand::RestoreSession(session)) => {
                    *engine.session_mut() = session;
                    log::info!("player session restored");
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopped after {} frames", engine.time().frame);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance to the current wall time
        let now = Timestamp::from_millis(origin.elapsed().as_secs_f64() * 1000.0);
        let snapshot = engine.tick(now);

        // 3. Store latest snapshot for polling
        publish_snapshot(latest_snapshot, snapshot);

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Most events held for a frontend that has stopped polling.
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Replace the stored snapshot, carrying over events nobody has polled yet.
/// Past `MAX_PENDING_EVENTS` the oldest are dropped.
pub(crate) fn publish_snapshot(slot: &Mutex<Option<EncounterSnapshot>>, mut snapshot: EncounterSnapshot) {
    if let Ok(mut lock) = slot.lock() {
        if let Some(previous) = lock.take() {
            let mut events = previous.events;
            events.append(&mut snapshot.events);
            snapshot.events = events;
        }
        let excess = snapshot.events.len().saturating_sub(MAX_PENDING_EVENTS);
        if excess > 0 {
            snapshot.events.drain(..excess);
            log::debug!("dropped {excess} unpolled events");
        }
        *lock = Some(snapshot);
    }
}
