//! Use-Case: Kontrollpunkte eines Segments in der View ändern.

use crate::app::events::SegmentPatch;
use crate::app::EditorState;
use crate::core::path_to_storage;
use std::sync::Arc;

/// Wendet einen Punkt-Patch auf das View-Segment an Position `index` an.
///
/// Nach dem Patch wird der komplette View-Pfad zurück in Speicher-Koordinaten
/// gerechnet, damit kanonische und View-Darstellung konsistent bleiben.
/// Ein Index außerhalb des Pfads wird gemeldet und ignoriert.
pub fn update_segment(state: &mut EditorState, index: usize, patch: SegmentPatch) {
    if index >= state.view_path.len() {
        log::warn!(
            "UpdateSegment: Index {} außerhalb des Pfads ({} Segmente)",
            index,
            state.view_path.len()
        );
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let view = Arc::make_mut(&mut state.view_path);
    if let Some(segment) = view.get_mut(index) {
        patch.apply_to(segment);
    }

    // Kanonische Darstellung aus der kompletten View neu ableiten
    state.path = Arc::new(path_to_storage(
        &state.view_path,
        &state.seats,
        state.active_seat,
    ));

    log::info!("Segment {} aktualisiert", index);
}
