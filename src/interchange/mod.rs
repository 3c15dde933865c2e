//! Import/Export der Kurvenparameter.
//!
//! Export: menschenlesbarer Textblock für die Zwischenablage.
//! Import: JSON-Array kanonischer Segmente (camelCase-Felder).

pub mod parser;
pub mod writer;

pub use parser::parse_segments_json;
pub use writer::export_curve_text;
