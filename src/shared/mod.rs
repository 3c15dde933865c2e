//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Enthält reine Geometrie und die Laufzeit-Optionen, die zwischen
//! `app` und `interchange` geteilt werden, um direkte Abhängigkeiten
//! zu vermeiden.

pub mod curve_geometry;
pub mod options;

pub use curve_geometry::{
    approx_segment_length, cubic_bezier_point, polyline_length, sample_segment,
};
pub use options::EditorOptions;
pub use options::{CURVE_SAMPLES, DEFAULT_SEGMENT_DURATION, EXTENSION_STEP, HISTORY_DEPTH};
