//! Encounter tuning loaded from JSON or built from defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("challenge key pool is empty")]
    EmptyKeyPool,
    #[error("tap position pool is empty")]
    EmptyTapPool,
    #[error("key {0:?} cannot be used as a challenge")]
    InvalidKey(char),
    #[error("tap position ({x}, {y}) lies outside the 0-100 screen range")]
    TapOutOfRange { x: f64, y: f64 },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Every tunable of the encounter and QTE. Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    pub max_depth: f64,
    pub throw_duration_ms: f64,
    pub sink_units_per_frame: f64,
    pub reel_units_per_frame: f64,
    pub slack_units_per_step: f64,
    pub slack_step_ms: f64,
    pub bite_delay_ms: f64,
    pub struggle_step_per_frame: f64,
    pub nominal_frame_ms: f64,
    pub max_frame_gap_ms: f64,
    pub qte_countdown_step_ms: f64,
    pub qte_countdown_step_secs: f64,
    pub qte_reprompt_delay_ms: f64,
    pub tap_half_extent: f64,
    pub keys: Vec<char>,
    pub tap_positions: Vec<(f64, f64)>,
    /// Re-roll a challenge identical to the previous one.
    pub avoid_repeats: bool,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            throw_duration_ms: THROW_DURATION_MS,
            sink_units_per_frame: SINK_UNITS_PER_FRAME,
            reel_units_per_frame: REEL_UNITS_PER_FRAME,
            slack_units_per_step: SLACK_UNITS_PER_STEP,
            slack_step_ms: SLACK_STEP_MS,
            bite_delay_ms: BITE_DELAY_MS,
            struggle_step_per_frame: STRUGGLE_STEP_PER_FRAME,
            nominal_frame_ms: NOMINAL_FRAME_MS,
            max_frame_gap_ms: MAX_FRAME_GAP_MS,
            qte_countdown_step_ms: QTE_COUNTDOWN_STEP_MS,
            qte_countdown_step_secs: QTE_COUNTDOWN_STEP_SECS,
            qte_reprompt_delay_ms: QTE_REPROMPT_DELAY_MS,
            tap_half_extent: TAP_TARGET_HALF_EXTENT,
            keys: QTE_KEYS.to_vec(),
            tap_positions: QTE_TAP_POSITIONS.to_vec(),
            avoid_repeats: false,
        }
    }
}

impl EncounterConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EncounterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_depth", self.max_depth),
            ("throw_duration_ms", self.throw_duration_ms),
            ("sink_units_per_frame", self.sink_units_per_frame),
            ("reel_units_per_frame", self.reel_units_per_frame),
            ("slack_units_per_step", self.slack_units_per_step),
            ("slack_step_ms", self.slack_step_ms),
            ("bite_delay_ms", self.bite_delay_ms),
            ("nominal_frame_ms", self.nominal_frame_ms),
            ("max_frame_gap_ms", self.max_frame_gap_ms),
            ("qte_countdown_step_ms", self.qte_countdown_step_ms),
            ("qte_countdown_step_secs", self.qte_countdown_step_secs),
            ("qte_reprompt_delay_ms", self.qte_reprompt_delay_ms),
            ("tap_half_extent", self.tap_half_extent),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !self.struggle_step_per_frame.is_finite() || self.struggle_step_per_frame < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "struggle_step_per_frame",
                value: self.struggle_step_per_frame,
            });
        }

        if self.keys.is_empty() {
            return Err(ConfigError::EmptyKeyPool);
        }
        // Space is reserved for casting.
        if let Some(&key) = self.keys.iter().find(|k| !k.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidKey(key));
        }

        if self.tap_positions.is_empty() {
            return Err(ConfigError::EmptyTapPool);
        }
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if let Some(&(x, y)) = self
            .tap_positions
            .iter()
            .find(|(x, y)| !in_range(*x) || !in_range(*y))
        {
            return Err(ConfigError::TapOutOfRange { x, y });
        }
        Ok(())
    }

    /// Line sink speed (units per ms).
    pub fn sink_rate(&self) -> f64 {
        self.sink_units_per_frame / self.nominal_frame_ms
    }

    /// Line reel-in speed (units per ms).
    pub fn reel_rate(&self) -> f64 {
        self.reel_units_per_frame / self.nominal_frame_ms
    }

    /// Slack decay speed (units per ms).
    pub fn slack_rate(&self) -> f64 {
        self.slack_units_per_step / self.slack_step_ms
    }
}
