//! QTE input listener registrations.
//!
//! A registration is a move-only handle: detaching consumes it, so a
//! listener cannot be removed twice, and the registry refuses a second live
//! registration for the same modality.

use tidecast_core::enums::InputModality;

/// Proof of a live registration. Not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerHandle {
    id: u64,
    modality: InputModality,
}

impl ListenerHandle {
    pub fn modality(&self) -> InputModality {
        self.modality
    }
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    desktop: Option<u64>,
    touch: Option<u64>,
    next_id: u64,
    attached_total: u64,
    detached_total: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, modality: InputModality) -> &mut Option<u64> {
        match modality {
            InputModality::Desktop => &mut self.desktop,
            InputModality::Touch => &mut self.touch,
        }
    }

    /// Register a listener. Returns None if one is already live for `modality`.
    pub fn attach(&mut self, modality: InputModality) -> Option<ListenerHandle> {
        if self.slot(modality).is_some() {
            log::warn!("{modality:?} QTE listener already live, refusing second registration");
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        *self.slot(modality) = Some(id);
        self.attached_total += 1;
        Some(ListenerHandle { id, modality })
    }

    /// Remove a registration.
    pub fn detach(&mut self, handle: ListenerHandle) {
        let slot = self.slot(handle.modality);
        if *slot == Some(handle.id) {
            *slot = None;
            self.detached_total += 1;
        }
    }

    pub fn is_live(&self, modality: InputModality) -> bool {
        match modality {
            InputModality::Desktop => self.desktop.is_some(),
            InputModality::Touch => self.touch.is_some(),
        }
    }

    pub fn live_count(&self) -> usize {
        usize::from(self.desktop.is_some()) + usize::from(self.touch.is_some())
    }

    pub fn attached_total(&self) -> u64 {
        self.attached_total
    }

    pub fn detached_total(&self) -> u64 {
        self.detached_total
    }
}
