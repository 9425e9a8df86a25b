//! Deferred actions, fired by comparing timestamps during `tick`.

use tidecast_core::types::Timestamp;

/// Work deferred to a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// The fish takes the bait.
    Bite,
}

/// A single scheduled entry.
#[derive(Debug, Clone)]
pub struct ScheduledAction {
    pub due_at: Timestamp,
    /// Encounter that scheduled this action.
    pub encounter_id: u64,
    pub action: DeferredAction,
}

#[derive(Debug, Clone, Default)]
pub struct DeferredSchedule {
    entries: Vec<ScheduledAction>,
}

impl DeferredSchedule {
    pub fn schedule(&mut self, due_at: Timestamp, encounter_id: u64, action: DeferredAction) {
        self.entries.push(ScheduledAction {
            due_at,
            encounter_id,
            action,
        });
    }

    /// Drop every pending action.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.entries.len();
        self.entries.clear();
        cancelled
    }

    /// Remove and return the first action due at `now` for `encounter_id`.
    /// Due entries from other encounters are discarded.
    pub fn take_due(&mut self, now: Timestamp, encounter_id: u64) -> Option<DeferredAction> {
        let mut fired = None;
        self.entries.retain(|entry| {
            if entry.due_at > now {
                return true;
            }
            if entry.encounter_id != encounter_id {
                log::debug!(
                    "discarding stale {:?} from encounter {}",
                    entry.action,
                    entry.encounter_id
                );
            } else if fired.is_none() {
                fired = Some(entry.action);
            } else {
                return true;
            }
            false
        });
        fired
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
