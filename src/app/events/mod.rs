//! EditorCommand-Enum für den Command-Datenfluss.

mod command;

pub use command::{EditorCommand, SegmentPatch};
