//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod history;
pub mod playback;
pub mod seat;
pub mod smoothing;
pub mod transfer;
