//! StageFlight Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod interchange;
pub mod shared;

pub use app::{EditorCommand, EditorController, EditorState, SegmentPatch};
pub use core::{CurvePath, CurveSegment, PathExtra, SeatRing, SmoothingPlan};
pub use interchange::{export_curve_text, parse_segments_json};
pub use shared::EditorOptions;
