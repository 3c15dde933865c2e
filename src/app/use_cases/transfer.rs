//! Use-Case: Segmentliste aus externer Quelle übernehmen.

use crate::app::EditorState;
use crate::core::{CurvePath, CurveSegment};
use std::sync::Arc;

/// Ersetzt den kanonischen Pfad komplett durch die importierte Segmentliste.
///
/// Die Segmente müssen bereits validiert sein (endliche Koordinaten,
/// brauchbare Dauer) — das erledigt der JSON-Parser in
/// [`crate::interchange`] vor dem Command-Dispatch.
pub fn import_segments(state: &mut EditorState, segments: Vec<CurveSegment>) {
    state.record_undo_snapshot();

    state.path = Arc::new(CurvePath::from_segments(segments));
    state.rebuild_view();

    log::info!("{} Segmente importiert", state.path.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_replaces_existing_path() {
        let mut state = EditorState::with_sample_path();
        let incoming = vec![CurveSegment::placeholder(), CurveSegment::placeholder()];

        import_segments(&mut state, incoming);

        assert_eq!(state.segment_count(), 2);
        assert_eq!(state.view_path.len(), 2);
        assert!(state.can_undo(), "Import muss rückgängig machbar sein");
    }

    #[test]
    fn importing_empty_list_clears_path() {
        let mut state = EditorState::with_sample_path();

        import_segments(&mut state, Vec::new());

        assert!(state.path.is_empty());
        assert!(state.view_path.is_empty());
    }
}
