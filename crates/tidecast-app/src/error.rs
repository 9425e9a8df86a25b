use thiserror::Error;

use tidecast_core::config::ConfigError;
use tidecast_sim::save::SaveError;

/// Errors surfaced to the frontend by the host layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("session already running")]
    AlreadyRunning,
    #[error("session not started")]
    NotStarted,
    #[error("game loop is no longer receiving commands")]
    ChannelClosed,
    #[error("shared state lock poisoned")]
    LockPoisoned,
    #[error("game loop did not answer in time")]
    Timeout,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Save(#[from] SaveError),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}
