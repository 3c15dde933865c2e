//! Use-Case: Animations-Wiedergabe schalten.

use crate::app::EditorState;

/// Setzt das Wiedergabe-Flag.
///
/// Läuft wie jede Mutation über die History, damit Undo auch den
/// Wiedergabezustand wiederherstellt. Setzen auf den aktuellen Wert ist
/// ein No-op ohne History-Eintrag.
pub fn set_play_animation(state: &mut EditorState, playing: bool) {
    if state.play_animation == playing {
        return;
    }

    state.record_undo_snapshot();
    state.play_animation = playing;

    log::info!(
        "Animation {}",
        if playing { "gestartet" } else { "pausiert" }
    );
}
