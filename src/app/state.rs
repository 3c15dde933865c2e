//! Application State — zentrale Datenhaltung.

use super::history::Snapshot;
use super::CommandLog;
use crate::core::{path_to_view, CurvePath, CurveSegment, SeatRing};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Hauptzustand des Editors.
///
/// Hält das Pfad-Paar aus Speicher- und View-Darstellung: `path` ist die
/// kanonische Form (Segmente ggf. platz-relativ), `view_path` die daraus
/// abgeleitete absolute Form für Rendering und Bearbeitung. Beide liegen in
/// einem `Arc`, damit History-Snapshots O(1) bleiben.
pub struct EditorState {
    /// Feste Bühnenplätze (Anker für relative Segmente)
    pub seats: SeatRing,
    /// Kanonischer Pfad (Speicher-Koordinaten)
    pub path: Arc<CurvePath>,
    /// Abgeleiteter Pfad in absoluten View-Koordinaten
    pub view_path: Arc<CurvePath>,
    /// Index des aktiven Bühnenplatzes
    pub active_seat: usize,
    /// Ob die Flug-Animation läuft
    pub play_animation: bool,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: super::history::EditHistory,
    /// Laufzeit-Optionen (Dauer, Schrittweite, Glättungsplan)
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt einen leeren Editor-State mit den neun Standard-Plätzen.
    pub fn new() -> Self {
        Self::with_seats(SeatRing::standard_nine(), EditorOptions::default())
    }

    /// Erstellt einen Editor-State mit eigener Platz-Tabelle.
    ///
    /// Der aktive Platz startet auf dem Standard-Index, sofern die Tabelle
    /// groß genug ist, sonst auf 0.
    pub fn with_seats(seats: SeatRing, options: EditorOptions) -> Self {
        let active_seat = if seats.contains_index(SeatRing::DEFAULT_SEAT) {
            SeatRing::DEFAULT_SEAT
        } else {
            0
        };
        let history_depth = options.history_depth;
        Self {
            seats,
            path: Arc::new(CurvePath::new()),
            view_path: Arc::new(CurvePath::new()),
            active_seat,
            play_animation: true,
            command_log: CommandLog::new(),
            history: super::history::EditHistory::new_with_capacity(history_depth),
            options,
        }
    }

    /// Erstellt einen Editor-State mit dem Demo-Segment als Startpfad.
    ///
    /// Speicher- und View-Darstellung sind anfangs identisch, da das
    /// Demo-Segment absolut ist.
    pub fn with_sample_path() -> Self {
        let mut state = Self::new();
        let path = CurvePath::from_segments(vec![CurveSegment::sample()]);
        state.view_path = Arc::new(path_to_view(&path, &state.seats, state.active_seat));
        state.path = Arc::new(path);
        state
    }

    /// Leitet die View-Darstellung neu aus dem kanonischen Pfad ab.
    pub fn rebuild_view(&mut self) {
        self.view_path = Arc::new(path_to_view(&self.path, &self.seats, self.active_seat));
    }

    /// Gibt die Anzahl der Segmente zurück (kanonisch und View sind gleich lang).
    pub fn segment_count(&self) -> usize {
        self.path.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_state_starts_on_default_seat() {
        let state = EditorState::new();
        assert_eq!(state.active_seat, SeatRing::DEFAULT_SEAT);
        assert!(state.play_animation);
        assert!(state.path.is_empty());
        assert!(state.view_path.is_empty());
    }

    #[test]
    fn test_small_seat_ring_falls_back_to_first_seat() {
        let ring = SeatRing::new(vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)]);
        let state = EditorState::with_seats(ring, EditorOptions::default());
        assert_eq!(state.active_seat, 0);
    }

    #[test]
    fn test_sample_path_has_identical_view() {
        let state = EditorState::with_sample_path();
        assert_eq!(state.segment_count(), 1);
        assert_eq!(
            state.path.segments(),
            state.view_path.segments(),
            "Demo-Segment ist absolut, View muss identisch sein"
        );
    }

    #[test]
    fn test_rebuild_view_resolves_relative_segments() {
        let mut state = EditorState::new();
        let segment = CurveSegment::sample().with_extra(2.0, true);
        state.path = Arc::new(CurvePath::from_segments(vec![segment.clone()]));

        state.rebuild_view();

        let anchor = state
            .seats
            .position(state.active_seat)
            .expect("Standard-Platz erwartet");
        assert_eq!(
            state.view_path.get(0).expect("Segment erwartet").start_point,
            segment.start_point + anchor
        );
    }
}
