//! Challenge generation strategies, one per input modality.

use rand::{Rng, RngCore};

use tidecast_core::config::EncounterConfig;
use tidecast_core::enums::InputModality;
use tidecast_core::types::Challenge;

/// Produces challenges for one input modality.
pub trait ChallengeStrategy: Send {
    fn modality(&self) -> InputModality;

    /// Sample the next challenge. `previous` is the challenge just cleared, if any.
    fn next(&mut self, rng: &mut dyn RngCore, previous: Option<&Challenge>) -> Challenge;
}

/// Desktop: press a key from a fixed pool.
pub struct KeyPressStrategy {
    keys: Vec<char>,
    avoid_repeats: bool,
}

/// Touch: tap a target at one of a fixed set of screen positions.
pub struct TapTargetStrategy {
    positions: Vec<(f64, f64)>,
    avoid_repeats: bool,
}

impl KeyPressStrategy {
    pub fn new(keys: &[char], avoid_repeats: bool) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_ascii_uppercase()).collect(),
            avoid_repeats,
        }
    }
}

impl TapTargetStrategy {
    pub fn new(positions: &[(f64, f64)], avoid_repeats: bool) -> Self {
        Self {
            positions: positions.to_vec(),
            avoid_repeats,
        }
    }
}

impl ChallengeStrategy for KeyPressStrategy {
    fn modality(&self) -> InputModality {
        InputModality::Desktop
    }

    fn next(&mut self, rng: &mut dyn RngCore, previous: Option<&Challenge>) -> Challenge {
        let last = match previous {
            Some(Challenge::KeyPress { key }) if self.avoid_repeats => {
                self.keys.iter().position(|k| k == key)
            }
            _ => None,
        };
        let key = self.keys[sample_index(rng, self.keys.len(), last)];
        Challenge::KeyPress { key }
    }
}

impl ChallengeStrategy for TapTargetStrategy {
    fn modality(&self) -> InputModality {
        InputModality::Touch
    }

    fn next(&mut self, rng: &mut dyn RngCore, previous: Option<&Challenge>) -> Challenge {
        let last = match previous {
            Some(&Challenge::TapTarget { x, y }) if self.avoid_repeats => {
                self.positions.iter().position(|&p| p == (x, y))
            }
            _ => None,
        };
        let (x, y) = self.positions[sample_index(rng, self.positions.len(), last)];
        Challenge::TapTarget { x, y }
    }
}

/// Uniform index into a pool of `len`, skipping `exclude` when the pool has
/// another choice. One draw either way.
fn sample_index(rng: &mut dyn RngCore, len: usize, exclude: Option<usize>) -> usize {
    match exclude {
        Some(skip) if len > 1 => {
            let i = rng.gen_range(0..len - 1);
            if i >= skip {
                i + 1
            } else {
                i
            }
        }
        _ => rng.gen_range(0..len),
    }
}

/// Strategy for the session's input modality. Pools come from a validated config.
pub fn strategy_for(modality: InputModality, config: &EncounterConfig) -> Box<dyn ChallengeStrategy> {
    match modality {
        InputModality::Desktop => Box::new(KeyPressStrategy::new(&config.keys, config.avoid_repeats)),
        InputModality::Touch => Box::new(TapTargetStrategy::new(
            &config.tap_positions,
            config.avoid_repeats,
        )),
    }
}
