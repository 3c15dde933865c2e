//! Verlängert einen Pfad in Richtung des auslaufenden Tangenten-Handles.

use super::{CurveSegment, PathExtra};

/// Erzeugt ein Anschluss-Segment hinter `last` (View-Koordinaten).
///
/// Die Richtung ist `end_point − mid_point_b` des letzten Segments,
/// bewusst unnormalisiert: ein längeres Handle erzeugt eine längere
/// Verlängerung. Die neuen Punkte liegen bei `step`, `2·step` und
/// `3·step` entlang dieser Richtung, der Startpunkt ist der bisherige
/// Endpunkt. Das neue Segment wird mit `duration`/`is_relative` gestempelt.
///
/// Gibt `None` zurück, wenn Handle und Endpunkt zusammenfallen — ohne
/// Richtung würde nur ein kollabiertes Segment entstehen.
pub fn extend_from_last(
    last: &CurveSegment,
    step: f32,
    duration: f32,
    is_relative: bool,
) -> Option<CurveSegment> {
    let direction = last.end_point - last.mid_point_b;
    if direction.length() < f32::EPSILON {
        return None;
    }

    let start = last.end_point;
    Some(CurveSegment {
        start_point: start,
        mid_point_a: start + direction * step,
        mid_point_b: start + direction * (2.0 * step),
        end_point: start + direction * (3.0 * step),
        path_extra: Some(PathExtra {
            duration,
            is_relative,
        }),
    })
}
