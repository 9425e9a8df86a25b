//! Catch notification seam.
//!
//! Notifiers are fire-and-forget: the engine logs a failure and keeps the
//! catch it has already committed.

use thiserror::Error;

use tidecast_core::fish::FishDescriptor;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notifier unavailable: {0}")]
    Unavailable(String),
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Receives each landed fish exactly once.
pub trait CatchNotifier {
    fn on_fish_caught(&mut self, fish: &FishDescriptor) -> Result<(), NotifyError>;
}

/// Ignores every catch.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl CatchNotifier for NullNotifier {
    fn on_fish_caught(&mut self, _fish: &FishDescriptor) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Keeps the player's single most valuable catch this session. Only a
/// catch worth strictly more than it is queued for leaderboard submission.
#[derive(Debug, Default)]
pub struct LeaderboardNotifier {
    best: Option<FishDescriptor>,
    submitted: Vec<FishDescriptor>,
}

impl LeaderboardNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `fish` beats the personal best, regardless of rarity.
    pub fn is_candidate(&self, fish: &FishDescriptor) -> bool {
        self.best.as_ref().map_or(true, |best| fish.value > best.value)
    }

    pub fn best(&self) -> Option<&FishDescriptor> {
        self.best.as_ref()
    }

    /// Catches that set a new personal best, oldest first.
    pub fn submitted(&self) -> &[FishDescriptor] {
        &self.submitted
    }

    /// Take the pending submissions, e.g. to post them to a server.
    pub fn drain_submitted(&mut self) -> Vec<FishDescriptor> {
        std::mem::take(&mut self.submitted)
    }
}

impl CatchNotifier for LeaderboardNotifier {
    fn on_fish_caught(&mut self, fish: &FishDescriptor) -> Result<(), NotifyError> {
        if self.is_candidate(fish) {
            log::info!("new personal best: {} worth {}", fish.fish_type, fish.value);
            self.best = Some(fish.clone());
            self.submitted.push(fish.clone());
        }
        Ok(())
    }
}
