//! Player economy: gold, catch count, inventory, and the buyback slot.

use std::cmp::Reverse;

use thiserror::Error;

use tidecast_core::enums::InventorySort;
use tidecast_core::fish::FishDescriptor;
use tidecast_core::state::SessionView;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EconomyError {
    #[error("no fish at inventory position {0}")]
    NoSuchFish(usize),
    #[error("buyback slot is empty")]
    BuybackEmpty,
    #[error("need {need} gold, have {have}")]
    InsufficientGold { need: u64, have: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct PlayerSession {
    pub(crate) gold: u64,
    pub(crate) fish_count: u32,
    /// Catch order, oldest first.
    pub(crate) inventory: Vec<FishDescriptor>,
    sort: InventorySort,
    buyback: Option<FishDescriptor>,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn fish_count(&self) -> u32 {
        self.fish_count
    }

    pub fn sort(&self) -> InventorySort {
        self.sort
    }

    pub fn buyback_slot(&self) -> Option<&FishDescriptor> {
        self.buyback.as_ref()
    }

    pub fn record_catch(&mut self, fish: FishDescriptor) {
        self.fish_count += 1;
        self.inventory.push(fish);
    }

    pub fn set_sort(&mut self, order: InventorySort) {
        self.sort = order;
    }

    /// Storage indices in display order.
    fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.inventory.len()).collect();
        let inv = &self.inventory;
        match self.sort {
            InventorySort::Recent => order.reverse(),
            InventorySort::Value => order.sort_by_key(|&i| Reverse(inv[i].value)),
            InventorySort::Rarity => {
                order.sort_by_key(|&i| (Reverse(inv[i].rarity), Reverse(inv[i].value)))
            }
        }
        order
    }

    /// Inventory in the current sort order.
    pub fn inventory(&self) -> Vec<&FishDescriptor> {
        self.display_order()
            .into_iter()
            .map(|i| &self.inventory[i])
            .collect()
    }

    /// Sell the fish at `index` in display order. The fish replaces whatever
    /// was in the buyback slot. Returns the gold earned.
    pub fn sell_fish(&mut self, index: usize) -> Result<u32, EconomyError> {
        let storage = *self
            .display_order()
            .get(index)
            .ok_or(EconomyError::NoSuchFish(index))?;
        let fish = self.inventory.remove(storage);
        let value = fish.value;
        self.gold += u64::from(value);
        self.buyback = Some(fish);
        Ok(value)
    }

    /// Repurchase the buyback fish for its sale value. Returns the gold spent.
    pub fn buyback(&mut self) -> Result<u32, EconomyError> {
        let value = self
            .buyback
            .as_ref()
            .ok_or(EconomyError::BuybackEmpty)?
            .value;
        if self.gold < u64::from(value) {
            return Err(EconomyError::InsufficientGold {
                need: u64::from(value),
                have: self.gold,
            });
        }
        if let Some(fish) = self.buyback.take() {
            self.gold -= u64::from(value);
            self.inventory.push(fish);
        }
        Ok(value)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            gold: self.gold,
            fish_count: self.fish_count,
            inventory: self.inventory().into_iter().cloned().collect(),
            sort: self.sort,
            buyback: self.buyback.clone(),
        }
    }
}
