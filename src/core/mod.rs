//! Core-Domänentypen: Segmente, Pfade, Platz-Tabelle, Transform und Glättung.

pub mod continuity;
pub mod extension;
pub mod path;
/// Core-Datenmodelle für Flugpfade
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - CurvePath: Container für die geordnete Segment-Liste
/// - CurveSegment: Einzelnes Bézier-Segment mit vier Kontrollpunkten
/// - SeatRing: Feste Platz-Positionen für relative Segmente
pub mod seat;
pub mod segment;
pub mod transform;

pub use continuity::{align_join_handles, smooth_path, SmoothingPlan};
pub use extension::extend_from_last;
pub use path::CurvePath;
pub use seat::SeatRing;
pub use segment::{CurveSegment, PathExtra};
pub use transform::{path_to_storage, path_to_view, segment_to_storage, segment_to_view};
