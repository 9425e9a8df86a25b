//! Encounter engine: the core of the game.
//!
//! `EncounterEngine` owns the encounter state, the QTE controller, the
//! deferred-action schedule, and the player session; it processes input and
//! produces `EncounterSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::mem;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tidecast_core::commands::PlayerCommand;
use tidecast_core::config::{ConfigError, EncounterConfig};
use tidecast_core::constants::DEFAULT_SEED;
use tidecast_core::enums::{EncounterPhase, InputModality, QteOutcome};
use tidecast_core::events::GameEvent;
use tidecast_core::fish::SyncEvent;
use tidecast_core::state::EncounterSnapshot;
use tidecast_core::types::{FrameTime, ScreenPoint, Timestamp};
use tidecast_fishgen::{CatalogFishGenerator, FishGenerator};
use tidecast_qte::QteController;

use crate::clock::FrameClock;
use crate::encounter::EncounterState;
use crate::notifier::{CatchNotifier, LeaderboardNotifier};
use crate::scheduler::{DeferredAction, DeferredSchedule};
use crate::session::PlayerSession;
use crate::systems;
use crate::systems::line::LineUpdate;

/// Configuration for starting a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same encounter.
    pub seed: u64,
    /// Input modality, fixed for the engine's lifetime.
    pub modality: InputModality,
    pub encounter: EncounterConfig,
    /// Wall-clock timestamp the game clock starts from.
    pub start: Timestamp,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            modality: InputModality::Desktop,
            encounter: EncounterConfig::default(),
            start: Timestamp::ZERO,
        }
    }
}

/// The encounter engine. Generic over its fish generator and catch notifier.
pub struct EncounterEngine<G = CatalogFishGenerator, N = LeaderboardNotifier> {
    config: EncounterConfig,
    clock: FrameClock,
    state: EncounterState,
    qte: QteController,
    schedule: DeferredSchedule,
    session: PlayerSession,
    rng: ChaCha8Rng,
    generator: G,
    notifier: N,
    overlay_open: bool,
    active_event: Option<SyncEvent>,
    events: Vec<GameEvent>,
}

impl EncounterEngine {
    /// Create an engine with the catalog generator and leaderboard notifier.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let generator = CatalogFishGenerator::seeded(config.seed);
        Self::with_collaborators(config, generator, LeaderboardNotifier::new())
    }
}

impl<G: FishGenerator, N: CatchNotifier> EncounterEngine<G, N> {
    pub fn with_collaborators(config: SimConfig, generator: G, notifier: N) -> Result<Self, ConfigError> {
        config.encounter.validate()?;
        // Challenge rolls use their own stream so they never shift the fish sequence.
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        rng.set_stream(1);
        Ok(Self {
            clock: FrameClock::new(config.start, &config.encounter),
            state: EncounterState::new(config.encounter.max_depth),
            qte: QteController::new(config.modality, &config.encounter),
            schedule: DeferredSchedule::default(),
            session: PlayerSession::new(),
            rng,
            generator,
            notifier,
            overlay_open: false,
            active_event: None,
            events: Vec::new(),
            config: config.encounter,
        })
    }

    // --- Input ---

    /// Begin a new encounter. Silently ignored unless Idle with no overlay open.
    pub fn cast(&mut self) -> bool {
        if self.state.phase != EncounterPhase::Idle || self.overlay_open {
            return false;
        }
        self.schedule.cancel_all();
        self.state.begin_throw(self.clock.now());
        log::debug!("encounter {}: cast", self.state.encounter_id);
        self.events.push(GameEvent::CastStarted {
            encounter_id: self.state.encounter_id,
        });
        true
    }

    /// Forward a key press. Routed to the QTE when one is live; otherwise
    /// space casts and every other key is ignored.
    pub fn on_key_press(&mut self, key: char) {
        if self.qte.is_active() {
            self.qte.on_key_press(key, self.clock.now());
            self.collect_qte_events();
        } else if key == ' ' {
            self.cast();
        }
    }

    /// Forward a tap in percentage screen coordinates.
    pub fn on_tap(&mut self, x: f64, y: f64) {
        if self.qte.is_active() {
            self.qte.on_tap(ScreenPoint::new(x, y), self.clock.now());
            self.collect_qte_events();
        }
    }

    /// Reset to Idle from any phase: pending actions are cancelled, a live QTE
    /// is closed, and any hooked fish is lost. Returns false if already idle.
    pub fn abort(&mut self) -> bool {
        let was = self.state.phase;
        let cancelled = self.schedule.cancel_all();
        let closed = self.qte.close();
        self.collect_qte_events();
        if was == EncounterPhase::Idle && cancelled == 0 && !closed {
            return false;
        }
        self.state.reset();
        log::debug!(
            "encounter {} aborted from {was:?}",
            self.state.encounter_id
        );
        self.events.push(GameEvent::EncounterAborted {
            encounter_id: self.state.encounter_id,
            phase: was,
        });
        true
    }

    pub fn set_overlay_open(&mut self, open: bool) {
        self.overlay_open = open;
    }

    pub fn set_active_event(&mut self, event: Option<SyncEvent>) {
        if let Some(e) = &event {
            log::debug!("active event: {}", e.name);
        }
        self.active_event = event;
    }

    /// Apply a frontend command.
    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Cast => {
                self.cast();
            }
            PlayerCommand::KeyPress { key } => self.on_key_press(key),
            PlayerCommand::Tap { x, y } => self.on_tap(x, y),
            PlayerCommand::Abort => {
                self.abort();
            }
            PlayerCommand::SetOverlayOpen { open } => self.set_overlay_open(open),
            PlayerCommand::SetActiveEvent { event } => self.set_active_event(event),
            PlayerCommand::SellFish { index } => match self.session.sell_fish(index) {
                Ok(value) => {
                    if let Some(fish) = self.session.buyback_slot() {
                        self.events.push(GameEvent::FishSold {
                            fish_type: fish.fish_type.clone(),
                            value,
                        });
                    }
                }
                Err(e) => log::debug!("sell rejected: {e}"),
            },
            PlayerCommand::Buyback => {
                let fish_type = self.session.buyback_slot().map(|f| f.fish_type.clone());
                match self.session.buyback() {
                    Ok(value) => self.events.push(GameEvent::FishBoughtBack {
                        fish_type: fish_type.unwrap_or_default(),
                        value,
                    }),
                    Err(e) => log::debug!("buyback rejected: {e}"),
                }
            }
            PlayerCommand::SortInventory { order } => self.session.set_sort(order),
        }
    }

    // --- Tick ---

    /// Advance to wall time `now` and return the resulting snapshot.
    pub fn tick(&mut self, now: Timestamp) -> EncounterSnapshot {
        let step = self.clock.advance(now);
        if let Some(raw) = step.clamped_from {
            log::warn!("frame gap of {raw} ms replaced by one nominal frame");
            self.events.push(GameEvent::ClockClamped { raw_delta_ms: raw });
        }
        if step.delta_ms > 0.0 {
            self.run_systems(step.delta_ms);
        }
        self.build_snapshot()
    }

    /// Evaluate the current phase. At most one phase transition per call.
    fn run_systems(&mut self, delta_ms: f64) {
        let now = self.clock.now();
        match self.state.phase {
            EncounterPhase::Idle => {}
            EncounterPhase::Throwing => {
                if systems::line::run_throw(&mut self.state, &self.config, now) == LineUpdate::Landed {
                    log::debug!("encounter {}: line landed", self.state.encounter_id);
                    self.events.push(GameEvent::LineLanded {
                        encounter_id: self.state.encounter_id,
                    });
                }
            }
            EncounterPhase::Sinking => {
                if systems::line::run_sink(&mut self.state, &self.config, now)
                    == LineUpdate::ReachedBottom
                {
                    let delay = self.config.bite_delay_ms;
                    self.schedule
                        .schedule(now.offset(delay), self.state.encounter_id, DeferredAction::Bite);
                    log::debug!("encounter {}: bite in {delay} ms", self.state.encounter_id);
                    self.events.push(GameEvent::BiteScheduled {
                        encounter_id: self.state.encounter_id,
                        delay_ms: delay,
                    });
                }
            }
            EncounterPhase::AwaitingBite => {
                if let Some(DeferredAction::Bite) =
                    self.schedule.take_due(now, self.state.encounter_id)
                {
                    self.hook_fish(now);
                }
            }
            EncounterPhase::Reeling => {
                if self.qte.is_active() {
                    let outcome = self.qte.advance(now, &mut self.rng);
                    self.collect_qte_events();
                    match outcome {
                        Some(QteOutcome::Success) => self.engage_reel(now),
                        Some(QteOutcome::Failure) => self.lose_fish(),
                        None => {}
                    }
                } else if systems::line::run_reel(&mut self.state, &self.config, now, delta_ms)
                    == LineUpdate::ReeledIn
                {
                    self.land_fish();
                }
            }
            EncounterPhase::Complete => {
                if systems::line::run_slack(&mut self.state, &self.config, delta_ms)
                    == LineUpdate::Settled
                {
                    log::debug!("encounter {}: line settled", self.state.encounter_id);
                }
            }
        }
    }

    /// AwaitingBite → Reeling (gated).
    fn hook_fish(&mut self, now: Timestamp) {
        let fish = self.generator.generate(self.active_event.as_ref());
        log::info!(
            "encounter {}: hooked {:?} {}",
            self.state.encounter_id,
            fish.rarity,
            fish.fish_type
        );
        self.events.push(GameEvent::FishHooked {
            encounter_id: self.state.encounter_id,
            fish_type: fish.fish_type.clone(),
            rarity: fish.rarity,
        });
        let started = self.qte.start(&fish, now, &mut self.rng);
        self.collect_qte_events();
        self.state.current_fish = Some(fish);
        self.state.reel_started_at = None;
        self.state.struggle_phase = 0.0;
        self.state.phase = EncounterPhase::Reeling;
        if !started {
            // Without a QTE nothing could ever engage the reel.
            log::warn!(
                "encounter {}: QTE did not start, releasing the fish",
                self.state.encounter_id
            );
            self.lose_fish();
        }
    }

    /// Reeling (gated) → Reeling (active).
    fn engage_reel(&mut self, now: Timestamp) {
        self.state.reel_started_at = Some(now);
        self.state.reel_initial_depth = self.state.line_depth;
        self.state.struggle_phase = 0.0;
    }

    /// Reeling (gated) → Complete.
    fn lose_fish(&mut self) {
        if let Some(fish) = self.state.current_fish.take() {
            log::info!(
                "encounter {}: {} got away",
                self.state.encounter_id,
                fish.fish_type
            );
        }
        self.schedule.cancel_all();
        self.state.struggle_phase = 0.0;
        self.state.phase = EncounterPhase::Complete;
        self.events.push(GameEvent::LineSlack {
            encounter_id: self.state.encounter_id,
        });
    }

    /// Reeling (active) → Idle.
    fn land_fish(&mut self) {
        let Some(fish) = self.state.current_fish.take() else {
            self.state.reset();
            return;
        };
        log::info!(
            "encounter {}: caught {:?} {} worth {}",
            self.state.encounter_id,
            fish.rarity,
            fish.fish_type,
            fish.value
        );
        self.events.push(GameEvent::FishCaught {
            fish_type: fish.fish_type.clone(),
            rarity: fish.rarity,
            value: fish.value,
        });
        if let Err(e) = self.notifier.on_fish_caught(&fish) {
            log::warn!("catch notification failed: {e}");
        }
        self.session.record_catch(fish);
        self.schedule.cancel_all();
        self.state.reset();
    }

    // --- Read access ---

    /// Snapshot of the current state. Does not drain pending events.
    pub fn snapshot(&self) -> EncounterSnapshot {
        systems::snapshot::build_snapshot(
            self.clock.time(),
            &self.state,
            self.qte.view(),
            self.overlay_open,
            self.active_event.as_ref(),
            &self.session,
            Vec::new(),
        )
    }

    /// Move QTE events into the engine queue, keeping emission order.
    fn collect_qte_events(&mut self) {
        self.events.extend(self.qte.drain_events());
    }

    fn build_snapshot(&mut self) -> EncounterSnapshot {
        let events = mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            self.clock.time(),
            &self.state,
            self.qte.view(),
            self.overlay_open,
            self.active_event.as_ref(),
            &self.session,
            events,
        )
    }

    pub fn phase(&self) -> EncounterPhase {
        self.state.phase
    }

    pub fn time(&self) -> FrameTime {
        self.clock.time()
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn qte(&self) -> &QteController {
        &self.qte
    }

    #[cfg(test)]
    pub(crate) fn qte_mut(&mut self) -> &mut QteController {
        &mut self.qte
    }

    pub fn pending_actions(&self) -> usize {
        self.schedule.pending()
    }

    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PlayerSession {
        &mut self.session
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn active_event(&self) -> Option<&SyncEvent> {
        self.active_event.as_ref()
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }
}
