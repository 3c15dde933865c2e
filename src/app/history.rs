use crate::core::CurvePath;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
/// der teure Pfad-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt (COW-Semantik). Jede Mutation wird vollständig erfasst,
/// inklusive Platz-Index und Abspiel-Flag.
#[derive(Clone)]
pub struct Snapshot {
    /// Kanonischer Pfad (Arc-Klon für O(1)-Snapshot)
    pub path: Arc<CurvePath>,
    /// Abgeleitete View (Arc-Klon)
    pub view_path: Arc<CurvePath>,
    /// Aktiver Platz-Index zum Zeitpunkt des Snapshots
    pub active_seat: usize,
    /// Abspiel-Flag zum Zeitpunkt des Snapshots
    pub play_animation: bool,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::EditorState) -> Self {
        Self {
            path: state.path.clone(), // O(1): nur Arc-Ref-Count erhöhen
            view_path: state.view_path.clone(),
            active_seat: state.active_seat,
            play_animation: state.play_animation,
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::EditorState) {
        state.path = self.path;
        state.view_path = self.view_path;
        state.active_seat = self.active_seat;
        state.play_animation = self.play_animation;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
///
/// Die Tiefe ist auf `max_depth` begrenzt; die ältesten Einträge
/// fallen beim Überschreiten heraus.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Record a pre-built snapshot. Accepting a Snapshot avoids simultaneous
    /// mutable/immutable borrows on the full `EditorState`.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(prev) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(prev)
        } else {
            None
        }
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}
