//! Use-Case: Pfad um ein generiertes Folgesegment verlängern.

use crate::app::EditorState;
use crate::core::{extend_from_last, segment_to_storage};
use std::sync::Arc;

/// Erzeugt aus dem letzten View-Segment ein geradliniges Folgesegment und
/// hängt es in Speicher-Koordinaten an.
///
/// Die Richtung kommt aus dem auslaufenden Handle des letzten Segments,
/// die Schrittweite aus den Optionen. Auf leerem Pfad, bei degenerierter
/// Richtung oder unbrauchbarer Dauer passiert nichts.
pub fn extend_path(state: &mut EditorState, is_relative: bool, duration: f32) {
    if !duration.is_finite() || duration <= 0.0 {
        log::warn!("ExtendPath: Dauer {} ist nicht verwendbar", duration);
        return;
    }

    let Some(last) = state.view_path.last() else {
        log::warn!("ExtendPath: Pfad ist leer, keine Richtung ableitbar");
        return;
    };

    let step = state.options.extension_step;
    let Some(new_segment) = extend_from_last(last, step, duration, is_relative) else {
        log::warn!("ExtendPath: auslaufendes Handle ohne Richtung, Segment verworfen");
        return;
    };

    state.record_undo_snapshot();

    let canonical = segment_to_storage(&new_segment, &state.seats, state.active_seat);
    Arc::make_mut(&mut state.path).push(canonical);
    state.rebuild_view();

    log::info!(
        "Pfad verlängert auf {} Segmente ({}, Dauer {:.1}s)",
        state.path.len(),
        if is_relative { "platz-relativ" } else { "absolut" },
        duration
    );
}
