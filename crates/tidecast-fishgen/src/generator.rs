//! Fish generator seam and the seeded catalog implementation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tidecast_core::constants::EVENT_FISH_CHANCE;
use tidecast_core::enums::{Rarity, SizeTier};
use tidecast_core::fish::{FishDescriptor, SyncEvent};

use crate::catalog::{self, Species};
use crate::profiles::{rarity_profile, size_profile};

/// Produces the fish that takes the bait.
pub trait FishGenerator {
    fn generate(&mut self, active_event: Option<&SyncEvent>) -> FishDescriptor;
}

/// Rolls fish from the built-in catalog using weighted rarity and size tables.
pub struct CatalogFishGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl CatalogFishGenerator<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> CatalogFishGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn roll_rarity(&mut self) -> Rarity {
        let roll = self.rng.gen::<f64>();
        pick_weighted(&Rarity::ALL, roll, |r| rarity_profile(*r).chance)
    }

    fn roll_size(&mut self) -> SizeTier {
        let roll = self.rng.gen::<f64>();
        pick_weighted(&SizeTier::ALL, roll, |s| size_profile(*s).chance)
    }

    fn roll_species(&mut self, rarity: Rarity, event: Option<&SyncEvent>) -> &'static Species {
        let pool = catalog::species_for(rarity);

        if let Some(event) = event {
            if self.rng.gen_bool(EVENT_FISH_CHANCE) {
                // Same tier first, then any tier.
                let special = pool
                    .iter()
                    .find(|s| event.features(s.name))
                    .or_else(|| catalog::all_species().find(|s| event.features(s.name)));
                if let Some(species) = special {
                    return species;
                }
            }
        }

        &pool[self.rng.gen_range(0..pool.len())]
    }
}

impl<R: Rng> FishGenerator for CatalogFishGenerator<R> {
    fn generate(&mut self, active_event: Option<&SyncEvent>) -> FishDescriptor {
        let rarity = self.roll_rarity();
        let species = self.roll_species(rarity, active_event);
        let size = self.roll_size();

        let tier = rarity_profile(rarity);
        let event_multiplier = active_event.map_or(1.0, |e| e.multiplier);
        let value = (species.base_value as f64
            * tier.multiplier
            * size_profile(size).multiplier
            * event_multiplier)
            .floor() as u32;

        let fish = FishDescriptor {
            fish_type: species.name.to_string(),
            rarity,
            size,
            value,
            qte_time: tier.qte_time,
            qte_required: tier.qte_required,
            color: species.color.to_string(),
            rarity_color: tier.color.to_string(),
            is_event_fish: active_event.is_some_and(|e| e.features(species.name)),
        };
        log::debug!(
            "generated {:?} {:?} {} worth {}",
            fish.size,
            fish.rarity,
            fish.fish_type,
            fish.value
        );
        fish
    }
}

/// Cumulative weighted pick. `roll` in [0, 1) is scaled by the total weight
/// so every tier is reachable; anything past the end falls back to the first
/// item. Panics if `items` is empty.
pub fn pick_weighted<T: Copy>(items: &[T], roll: f64, weight: impl Fn(&T) -> f64) -> T {
    let total: f64 = items.iter().map(&weight).sum();
    let target = roll * total;
    let mut cumulative = 0.0;
    for item in items {
        cumulative += weight(item);
        if target < cumulative {
            return *item;
        }
    }
    items[0]
}
