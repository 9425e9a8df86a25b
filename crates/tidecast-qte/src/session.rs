//! State of a single QTE activation.

use tidecast_core::config::EncounterConfig;
use tidecast_core::constants::QTE_TIME_EPSILON;
use tidecast_core::enums::{InputModality, QteOutcome};
use tidecast_core::fish::FishDescriptor;
use tidecast_core::state::QteView;
use tidecast_core::types::{Challenge, Timestamp};

use crate::listeners::ListenerHandle;

/// Countdown and pacing parameters, taken from the encounter config.
#[derive(Debug, Clone, Copy)]
pub struct QteTiming {
    pub step_ms: f64,
    pub step_secs: f64,
    pub reprompt_delay_ms: f64,
    pub tap_half_extent: f64,
}

impl QteTiming {
    pub fn from_config(config: &EncounterConfig) -> Self {
        Self {
            step_ms: config.qte_countdown_step_ms,
            step_secs: config.qte_countdown_step_secs,
            reprompt_delay_ms: config.qte_reprompt_delay_ms,
            tap_half_extent: config.tap_half_extent,
        }
    }
}

/// One QTE, created at the bite and dropped on resolution.
#[derive(Debug)]
pub struct QteSession {
    modality: InputModality,
    required: u32,
    success_count: u32,
    max_time: f64,
    time_remaining: f64,
    challenge: Option<Challenge>,
    last_challenge: Option<Challenge>,
    /// Game time up to which the countdown has been applied.
    countdown_anchor: Timestamp,
    reprompt_at: Option<Timestamp>,
    pub(crate) listener: Option<ListenerHandle>,
}

impl QteSession {
    pub fn new(
        fish: &FishDescriptor,
        first: Challenge,
        now: Timestamp,
        listener: ListenerHandle,
    ) -> Self {
        Self {
            modality: listener.modality(),
            required: fish.qte_required,
            success_count: 0,
            max_time: fish.qte_time,
            time_remaining: fish.qte_time,
            challenge: Some(first),
            last_challenge: Some(first),
            countdown_anchor: now,
            reprompt_at: None,
            listener: Some(listener),
        }
    }

    /// Apply every whole countdown step elapsed since the last call.
    pub fn countdown(&mut self, now: Timestamp, timing: &QteTiming) {
        while now.elapsed_since(self.countdown_anchor) >= timing.step_ms {
            self.countdown_anchor = self.countdown_anchor.offset(timing.step_ms);
            self.time_remaining = (self.time_remaining - timing.step_secs).max(0.0);
        }
    }

    /// Whether the pause after a cleared challenge has run out.
    pub fn reprompt_due(&self, now: Timestamp) -> bool {
        self.reprompt_at.is_some_and(|at| now >= at) && !self.is_complete()
    }

    pub fn present(&mut self, challenge: Challenge) {
        self.challenge = Some(challenge);
        self.last_challenge = Some(challenge);
        self.reprompt_at = None;
    }

    /// Count a cleared challenge. Until the run is complete the timer refills
    /// and the next prompt is scheduled after the re-prompt delay.
    pub fn register_success(&mut self, now: Timestamp, timing: &QteTiming) {
        self.success_count = (self.success_count + 1).min(self.required);
        self.challenge = None;
        if !self.is_complete() {
            self.time_remaining = self.max_time;
            self.countdown_anchor = now;
            self.reprompt_at = Some(now.offset(timing.reprompt_delay_ms));
        }
    }

    pub fn is_complete(&self) -> bool {
        self.success_count >= self.required
    }

    /// Both exit conditions, success first.
    pub fn exit_check(&self) -> Option<QteOutcome> {
        if self.is_complete() {
            Some(QteOutcome::Success)
        } else if self.time_remaining <= QTE_TIME_EPSILON {
            Some(QteOutcome::Failure)
        } else {
            None
        }
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    pub fn last_challenge(&self) -> Option<&Challenge> {
        self.last_challenge.as_ref()
    }

    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    pub fn view(&self) -> QteView {
        QteView {
            modality: self.modality,
            success_count: self.success_count,
            required: self.required,
            time_remaining: self.time_remaining,
            max_time: self.max_time,
            challenge: self.challenge,
        }
    }
}
