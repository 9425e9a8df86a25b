//! QTE controller: owns the challenge strategy, the listener registry, and the
//! live session, and reports outcomes to the encounter engine.

use std::mem;

use rand::RngCore;

use tidecast_core::config::EncounterConfig;
use tidecast_core::enums::{InputModality, QteOutcome};
use tidecast_core::events::GameEvent;
use tidecast_core::fish::FishDescriptor;
use tidecast_core::state::QteView;
use tidecast_core::types::{ScreenPoint, Timestamp};

use crate::challenge::{strategy_for, ChallengeStrategy};
use crate::listeners::ListenerRegistry;
use crate::session::{QteSession, QteTiming};

pub struct QteController {
    strategy: Box<dyn ChallengeStrategy>,
    registry: ListenerRegistry,
    session: Option<QteSession>,
    timing: QteTiming,
    events: Vec<GameEvent>,
}

impl QteController {
    /// Modality is fixed for the controller's lifetime.
    pub fn new(modality: InputModality, config: &EncounterConfig) -> Self {
        Self::with_strategy(strategy_for(modality, config), config)
    }

    pub fn with_strategy(strategy: Box<dyn ChallengeStrategy>, config: &EncounterConfig) -> Self {
        Self {
            strategy,
            registry: ListenerRegistry::new(),
            session: None,
            timing: QteTiming::from_config(config),
            events: Vec::new(),
        }
    }

    pub fn modality(&self) -> InputModality {
        self.strategy.modality()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Begin a QTE for `fish`. No-op returning false if one is already running.
    pub fn start(&mut self, fish: &FishDescriptor, now: Timestamp, rng: &mut dyn RngCore) -> bool {
        if self.session.is_some() {
            return false;
        }
        let modality = self.modality();
        let Some(listener) = self.registry.attach(modality) else {
            return false;
        };
        self.events.push(GameEvent::ListenerAttached { modality });

        let first = self.strategy.next(rng, None);
        self.session = Some(QteSession::new(fish, first, now, listener));
        self.events.push(GameEvent::QteStarted {
            required: fish.qte_required,
            time_secs: fish.qte_time,
            modality,
        });
        self.events
            .push(GameEvent::ChallengePresented { challenge: first });
        log::debug!(
            "QTE started: {} x{} at {:.2}s each",
            fish.fish_type,
            fish.qte_required,
            fish.qte_time
        );
        true
    }

    /// Advance to game time `now`. Returns the outcome if the QTE resolved;
    /// the listener is already detached by then.
    pub fn advance(&mut self, now: Timestamp, rng: &mut dyn RngCore) -> Option<QteOutcome> {
        let session = self.session.as_mut()?;
        session.countdown(now, &self.timing);

        if session.reprompt_due(now) {
            let challenge = self.strategy.next(rng, session.last_challenge());
            session.present(challenge);
            self.events.push(GameEvent::ChallengePresented { challenge });
        }

        let outcome = session.exit_check()?;
        self.resolve(outcome);
        Some(outcome)
    }

    /// Route a key press to the live challenge. Returns true if it cleared one.
    /// Space is never an answer.
    pub fn on_key_press(&mut self, key: char, now: Timestamp) -> bool {
        if key == ' ' {
            return false;
        }
        let cleared = self
            .session
            .as_ref()
            .and_then(|s| s.challenge())
            .is_some_and(|c| c.matches_key(key));
        if cleared {
            self.clear_challenge(now);
        }
        cleared
    }

    /// Route a tap to the live challenge. Returns true if it cleared one.
    pub fn on_tap(&mut self, point: ScreenPoint, now: Timestamp) -> bool {
        let half_extent = self.timing.tap_half_extent;
        let cleared = self
            .session
            .as_ref()
            .and_then(|s| s.challenge())
            .is_some_and(|c| c.matches_tap(point, half_extent));
        if cleared {
            self.clear_challenge(now);
        }
        cleared
    }

    fn clear_challenge(&mut self, now: Timestamp) {
        if let Some(session) = self.session.as_mut() {
            session.register_success(now, &self.timing);
            self.events.push(GameEvent::QteProgress {
                success_count: session.success_count(),
                required: session.required(),
            });
        }
    }

    /// Close without an outcome (encounter aborted). Returns true if a QTE was live.
    pub fn close(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                self.release(session);
                log::debug!("QTE closed without resolution");
                true
            }
            None => false,
        }
    }

    fn resolve(&mut self, outcome: QteOutcome) {
        let Some(session) = self.session.take() else {
            return;
        };
        let (success_count, required) = (session.success_count(), session.required());
        self.release(session);
        match outcome {
            QteOutcome::Success => {
                log::info!("QTE won ({success_count}/{required})");
                self.events.push(GameEvent::QteSucceeded);
            }
            QteOutcome::Failure => {
                log::info!("QTE lost ({success_count}/{required})");
                self.events.push(GameEvent::QteFailed {
                    success_count,
                    required,
                });
            }
        }
    }

    fn release(&mut self, mut session: QteSession) {
        if let Some(listener) = session.listener.take() {
            let modality = listener.modality();
            self.registry.detach(listener);
            self.events.push(GameEvent::ListenerDetached { modality });
        }
    }

    pub fn view(&self) -> Option<QteView> {
        self.session.as_ref().map(QteSession::view)
    }

    pub fn session(&self) -> Option<&QteSession> {
        self.session.as_ref()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }
}

impl Drop for QteController {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            self.release(session);
        }
    }
}
