//! Application state shared between the host's command handlers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tidecast_core::commands::PlayerCommand;
use tidecast_core::state::EncounterSnapshot;
use tidecast_sim::save::SessionSave;
use tidecast_sim::session::PlayerSession;

/// Commands sent from the IPC layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the encounter engine.
    PlayerCommand(PlayerCommand),
    /// Capture the player session and send it back on `reply`.
    CaptureSession { reply: mpsc::Sender<SessionSave> },
    /// Replace the player session with a restored one.
    RestoreSession(PlayerSession),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// Must be Send + Sync so any host can hold it behind a shared reference:
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that does not exist before `start_session`
/// - `Arc<Mutex<...>>` holds the latest snapshot, shared with the game loop thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_session` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for `get_snapshot` polling. Events from ticks the
    /// frontend has not polled yet accumulate here.
    pub latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
    /// Join handle of the running game loop thread.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
