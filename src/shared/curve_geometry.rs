//! Reine Geometrie-Funktionen für kubische Bézier-Kurven.
//!
//! Layer-neutral: kann von `core`, `app` und `interchange` importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::CurveSegment;
use glam::Vec3;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Exakt an den Rändern: B(0) = P0 und B(1) = P3.
pub fn cubic_bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Tastet ein Segment als Polyline ab (`samples + 1` Punkte inkl. beider Enden).
pub fn sample_segment(segment: &CurveSegment, samples: usize) -> Vec<Vec3> {
    let samples = samples.max(1);
    let mut points = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        points.push(cubic_bezier_point(
            segment.start_point,
            segment.mid_point_a,
            segment.mid_point_b,
            segment.end_point,
            t,
        ));
    }
    points
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Approximierte Kurvenlänge eines Segments über `samples` Polylinien-Stücke.
pub fn approx_segment_length(segment: &CurveSegment, samples: usize) -> f32 {
    polyline_length(&sample_segment(segment, samples))
}
