//! Application Controller für zentrale Event-Verarbeitung.

use super::{use_cases, EditorCommand, EditorState};

/// Orchestriert Commands und Use-Cases auf dem EditorState.
///
/// Kollaborateure (UI, 3D-Szene) registrieren sich über
/// [`subscribe`](EditorController::subscribe) und werden nach jedem
/// verarbeiteten Command mit dem neuen Zustand benachrichtigt.
#[derive(Default)]
pub struct EditorController {
    listeners: Vec<Box<dyn FnMut(&EditorState)>>,
}

impl EditorController {
    /// Erstellt einen neuen Controller ohne Abonnenten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Beobachter für Zustandsänderungen.
    pub fn subscribe(&mut self, listener: impl FnMut(&EditorState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an die Use-Cases in `use_cases/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Editing ===
            EditorCommand::UpdateSegment { index, patch } => {
                use_cases::editing::update_segment(state, index, patch)
            }
            EditorCommand::AddSegment { segment } => {
                use_cases::editing::add_segment(state, segment)
            }
            EditorCommand::ExtendPath {
                is_relative,
                duration,
            } => use_cases::editing::extend_path(state, is_relative, duration),
            EditorCommand::RemoveSegment { segment } => {
                use_cases::editing::remove_segment(state, &segment)
            }
            EditorCommand::ClearSegments => use_cases::editing::clear_segments(state),

            // === Platz & Glättung ===
            EditorCommand::SetActiveSeat { index, plan } => {
                use_cases::seat::set_active_seat(state, index, plan)
            }
            EditorCommand::SmoothPath { plan } => use_cases::smoothing::smooth_path(state, plan),

            // === Wiedergabe ===
            EditorCommand::SetPlayAnimation { playing } => {
                use_cases::playback::set_play_animation(state, playing)
            }

            // === Import ===
            EditorCommand::ImportSegments { segments } => {
                use_cases::transfer::import_segments(state, segments)
            }

            // === History ===
            EditorCommand::Undo => use_cases::history::undo(state),
            EditorCommand::Redo => use_cases::history::redo(state),
        }

        self.notify(state);
        Ok(())
    }

    fn notify(&mut self, state: &EditorState) {
        for listener in &mut self.listeners {
            listener(state);
        }
    }
}
