//! Snapshot builder.

use tidecast_core::events::GameEvent;
use tidecast_core::fish::SyncEvent;
use tidecast_core::state::{EncounterSnapshot, LineView, QteView};
use tidecast_core::types::FrameTime;

use crate::animation;
use crate::encounter::EncounterState;
use crate::session::PlayerSession;

pub fn build_snapshot(
    time: FrameTime,
    state: &EncounterState,
    qte: Option<QteView>,
    overlay_open: bool,
    active_event: Option<&SyncEvent>,
    session: &PlayerSession,
    events: Vec<GameEvent>,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time,
        phase: state.phase,
        encounter_id: state.encounter_id,
        line: LineView {
            depth: state.line_depth,
            max_depth: state.max_depth,
            throw_progress: state.throw_progress,
            arc_height: animation::arc_height(state.throw_progress),
            reel_engaged: state.reel_engaged(),
            struggle_phase: state.struggle_phase,
        },
        current_fish: state.current_fish.clone(),
        qte,
        overlay_open,
        active_event: active_event.cloned(),
        session: session.view(),
        events,
    }
}
