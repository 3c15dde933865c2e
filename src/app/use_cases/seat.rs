//! Use-Case: Aktiven Bühnenplatz wechseln.

use crate::app::EditorState;
use crate::core::{smooth_path, SmoothingPlan};
use std::sync::Arc;

/// Wechselt den aktiven Platz, leitet die View neu ab und glättet sie.
///
/// Der kanonische Pfad bleibt unangetastet: Die Glättung wirkt nur auf die
/// View-Darstellung, bis eine spätere Bearbeitung sie zurückschreibt.
/// Ein unbekannter Platz-Index wird gemeldet und ignoriert. Der Wechsel auf
/// den bereits aktiven Platz läuft regulär durch, damit die View
/// deterministisch aus dem kanonischen Pfad reproduziert wird.
pub fn set_active_seat(state: &mut EditorState, index: usize, plan: SmoothingPlan) {
    if !state.seats.contains_index(index) {
        log::warn!(
            "SetActiveSeat: Platz {} existiert nicht ({} Plätze)",
            index,
            state.seats.len()
        );
        return;
    }

    state.record_undo_snapshot();

    state.active_seat = index;
    state.rebuild_view();
    smooth_path(Arc::make_mut(&mut state.view_path), plan);

    log::info!("Aktiver Platz: {} (Glättung: {:?})", index, plan);
}
