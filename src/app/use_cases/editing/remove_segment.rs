//! Use-Case: Segment per Wertvergleich entfernen.

use crate::app::EditorState;
use crate::core::CurveSegment;
use std::sync::Arc;

/// Entfernt alle wertgleichen Vorkommen des Segments aus dem kanonischen Pfad.
///
/// Die View-Darstellung wird danach einheitlich über die Transform-Schicht
/// neu abgeleitet. Ohne Treffer bleibt der Zustand unverändert und es
/// entsteht kein History-Eintrag.
pub fn remove_segment(state: &mut EditorState, segment: &CurveSegment) {
    if !state.path.segments().contains(segment) {
        log::debug!("RemoveSegment: kein wertgleiches Segment im Pfad");
        return;
    }

    state.record_undo_snapshot();

    let removed = Arc::make_mut(&mut state.path).remove_matching(segment);
    state.rebuild_view();

    log::info!("{} Segment(e) entfernt, {} verbleiben", removed, state.path.len());
}
