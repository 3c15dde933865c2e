//! Umrechnung zwischen Speicher-Koordinaten (ggf. platz-relativ) und
//! absoluten View-Koordinaten.
//!
//! Jedes Segment wird anhand seines eigenen `is_relative`-Flags gegen den
//! aktuell gewählten Platz interpretiert — gemischte Pfade sind erlaubt.
//! Absolute Segmente berühren die Platz-Tabelle nicht.

use super::{CurvePath, CurveSegment, SeatRing};

/// Rechnet ein Segment von Speicher- in View-Koordinaten um.
///
/// Relativ gespeicherte Segmente werden um die Position des Platzes
/// verschoben; absolute Segmente werden unverändert kopiert.
/// Der Platz-Index muss vom Aufrufer validiert sein (Programmierfehler sonst).
pub fn segment_to_view(segment: &CurveSegment, seats: &SeatRing, seat_index: usize) -> CurveSegment {
    if !segment.is_relative() {
        return segment.clone();
    }
    let anchor = seats
        .position(seat_index)
        .expect("Platz-Index muss vor dem Transform validiert sein");
    segment.translated(anchor)
}

/// Rechnet ein Segment von View- in Speicher-Koordinaten um (exakte Umkehrung).
pub fn segment_to_storage(
    segment: &CurveSegment,
    seats: &SeatRing,
    seat_index: usize,
) -> CurveSegment {
    if !segment.is_relative() {
        return segment.clone();
    }
    let anchor = seats
        .position(seat_index)
        .expect("Platz-Index muss vor dem Transform validiert sein");
    segment.translated(-anchor)
}

/// Leitet die komplette View aus dem kanonischen Pfad ab (1:1, Reihenfolge bleibt).
pub fn path_to_view(path: &CurvePath, seats: &SeatRing, seat_index: usize) -> CurvePath {
    CurvePath::from_segments(
        path.iter()
            .map(|s| segment_to_view(s, seats, seat_index))
            .collect(),
    )
}

/// Schreibt einen View-Pfad zurück in Speicher-Koordinaten.
pub fn path_to_storage(path: &CurvePath, seats: &SeatRing, seat_index: usize) -> CurvePath {
    CurvePath::from_segments(
        path.iter()
            .map(|s| segment_to_storage(s, seats, seat_index))
            .collect(),
    )
}
