//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod history;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Pfad-Paar, Plätze, History).
pub mod state;
pub mod use_cases;

pub use crate::core::{CurvePath, CurveSegment, SeatRing, SmoothingPlan};
pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, SegmentPatch};
pub use state::EditorState;
