//! Use-Case: Pfad glätten.

use crate::app::EditorState;
use crate::core::{path_to_storage, SmoothingPlan};
use std::sync::Arc;

/// Glättet die View-Darstellung und schreibt das Ergebnis in den
/// kanonischen Pfad zurück.
///
/// Anders als beim Platz-Wechsel ist die Glättung hier eine bewusste
/// Bearbeitung des Pfads und landet deshalb im Speicherformat. Pfade mit
/// weniger als zwei Segmenten sind ein No-op.
pub fn smooth_path(state: &mut EditorState, plan: SmoothingPlan) {
    if state.view_path.len() < 2 {
        log::debug!("SmoothPath: weniger als zwei Segmente, nichts zu glätten");
        return;
    }

    state.record_undo_snapshot();

    crate::core::smooth_path(Arc::make_mut(&mut state.view_path), plan);
    state.path = Arc::new(path_to_storage(
        &state.view_path,
        &state.seats,
        state.active_seat,
    ));

    log::info!("Pfad geglättet ({:?})", plan);
}
