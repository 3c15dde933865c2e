//! Use-Case-Funktionen für Segment-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `update_segment` — Kontrollpunkte in der View ändern
//! - `add_segment` — Segment anhängen / Pfad leeren
//! - `remove_segment` — Segment per Wertvergleich entfernen
//! - `extend_path` — Pfad um ein generiertes Folgesegment verlängern

mod add_segment;
mod extend_path;
mod remove_segment;
mod update_segment;

pub use add_segment::{add_segment, clear_segments};
pub use extend_path::extend_path;
pub use remove_segment::remove_segment;
pub use update_segment::update_segment;
