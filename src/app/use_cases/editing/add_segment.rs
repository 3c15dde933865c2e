//! Use-Case: Segment anhängen und Pfad leeren.

use crate::app::EditorState;
use crate::core::CurveSegment;
use std::sync::Arc;

/// Hängt ein kanonisches Segment ans Ende des Pfads an.
///
/// Die View-Darstellung wird anschließend aus dem kompletten kanonischen
/// Pfad neu abgeleitet.
pub fn add_segment(state: &mut EditorState, segment: CurveSegment) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    Arc::make_mut(&mut state.path).push(segment);
    state.rebuild_view();

    log::info!("Segment angehängt, Pfad hat jetzt {} Segmente", state.path.len());
}

/// Entfernt alle Segmente aus beiden Darstellungen.
///
/// Auf leerem Pfad ein No-op ohne History-Eintrag.
pub fn clear_segments(state: &mut EditorState) {
    if state.path.is_empty() {
        log::debug!("ClearSegments: Pfad ist bereits leer");
        return;
    }

    state.record_undo_snapshot();

    Arc::make_mut(&mut state.path).clear();
    Arc::make_mut(&mut state.view_path).clear();

    log::info!("Alle Segmente entfernt");
}
