//! Stetigkeits-Glättung an den Übergängen zwischen Bézier-Segmenten.
//!
//! Arbeitet ausschließlich auf View-Koordinaten (absolut). Erzwingt an jedem
//! Übergang Punkt-Stetigkeit und gleicht je nach Plan zusätzlich die
//! Tangenten-Handles an.

use serde::{Deserialize, Serialize};

use super::{CurvePath, CurveSegment};

/// Glättungs-Plan: welche Übergänge bekommen Tangenten-Angleichung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingPlan {
    /// Tangenten an jedem Übergang angleichen
    #[default]
    FullPath,
    /// Tangenten nur an Nahtstellen angleichen, an denen sich das
    /// Relativ-Flag der Nachbarsegmente unterscheidet (Übergang zwischen
    /// platz-relativem und absolutem Teilpfad)
    JoinsOnly,
}

/// Gleicht die beiden Handles am Übergang zweier Segmente an.
///
/// Beide Handles werden kollinear durch den Übergangspunkt gelegt, jeweils
/// im mittleren Abstand der bisherigen Handle-Distanzen. Die Richtung kommt
/// vom auslaufenden Handle des ersten Segments. Voraussetzung:
/// `b.start_point == a.end_point` (wird von [`smooth_path`] erzwungen).
///
/// Ist das auslaufende Handle deckungsgleich mit dem Endpunkt, gibt es keine
/// definierte Richtung — der Übergang bleibt dann unverändert.
pub fn align_join_handles(a: &mut CurveSegment, b: &mut CurveSegment) {
    let distance_out = a.mid_point_b.distance(a.end_point);
    let distance_in = b.mid_point_a.distance(b.start_point);
    let average = (distance_out + distance_in) / 2.0;

    let direction = a.mid_point_b - a.end_point;
    let magnitude = direction.length();
    if magnitude < f32::EPSILON {
        return;
    }
    let direction = direction / magnitude;

    a.mid_point_b = a.end_point + direction * average;
    b.mid_point_a = b.start_point - direction * average;
}

/// Glättet einen Pfad in place.
///
/// An jedem Übergang wird zuerst `start_point` des Folgesegments auf den
/// `end_point` des Vorgängers gesetzt (Punkt-Stetigkeit, unabhängig vom
/// Plan). Anschließend werden die Handles gemäß Plan angeglichen.
/// Pfade mit weniger als zwei Segmenten bleiben unverändert.
pub fn smooth_path(path: &mut CurvePath, plan: SmoothingPlan) {
    let segments = path.segments_mut();
    if segments.len() < 2 {
        return;
    }

    for i in 0..segments.len() - 1 {
        let (head, tail) = segments.split_at_mut(i + 1);
        let current = &mut head[i];
        let next = &mut tail[0];

        next.start_point = current.end_point;

        let align = match plan {
            SmoothingPlan::FullPath => true,
            SmoothingPlan::JoinsOnly => current.is_relative() != next.is_relative(),
        };
        if align {
            align_join_handles(current, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn disjoint_pair() -> (CurveSegment, CurveSegment) {
        let a = CurveSegment::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        );
        let b = CurveSegment::new(
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(6.0, 6.0, 5.0),
            Vec3::new(7.0, 6.0, 5.0),
            Vec3::new(8.0, 5.0, 5.0),
        );
        (a, b)
    }

    #[test]
    fn test_smooth_forces_point_continuity() {
        let (a, b) = disjoint_pair();
        let mut path = CurvePath::from_segments(vec![a.clone(), b]);

        smooth_path(&mut path, SmoothingPlan::FullPath);

        assert_eq!(
            path.get(1).unwrap().start_point,
            a.end_point,
            "Startpunkt muss exakt auf dem Endpunkt des Vorgängers liegen"
        );
    }

    #[test]
    fn test_aligned_handles_are_collinear_with_equal_magnitude() {
        let (a, b) = disjoint_pair();
        let mut path = CurvePath::from_segments(vec![a, b]);

        smooth_path(&mut path, SmoothingPlan::FullPath);

        let first = path.get(0).unwrap();
        let second = path.get(1).unwrap();
        let join = first.end_point;

        let out_handle = first.mid_point_b - join;
        let in_handle = second.mid_point_a - join;

        // Spiegelbildliche Handles: gleicher Betrag, entgegengesetzte Richtung
        assert!(
            in_handle.abs_diff_eq(-out_handle, 1e-5),
            "Handles müssen kollinear durch den Übergang laufen"
        );
        assert_relative_eq!(out_handle.length(), in_handle.length(), epsilon = 1e-5);

        // Mittlerer Abstand: (√2 + |(3,6,5)|) / 2
        let expected = (2.0f32.sqrt() + Vec3::new(3.0, 6.0, 5.0).length()) / 2.0;
        assert_relative_eq!(out_handle.length(), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_joins_only_skips_matching_flags() {
        let (a, b) = disjoint_pair();
        let original_handle_a = a.mid_point_b;
        let original_handle_b = b.mid_point_a;
        let mut path = CurvePath::from_segments(vec![a.clone(), b]);

        smooth_path(&mut path, SmoothingPlan::JoinsOnly);

        // Beide absolut: Punkt-Stetigkeit ja, Tangenten-Angleichung nein
        assert_eq!(path.get(1).unwrap().start_point, a.end_point);
        assert_eq!(path.get(0).unwrap().mid_point_b, original_handle_a);
        assert_eq!(path.get(1).unwrap().mid_point_a, original_handle_b);
    }

    #[test]
    fn test_joins_only_aligns_at_flag_seam() {
        let (a, b) = disjoint_pair();
        let a = a.with_extra(2.0, true);
        let b = b.with_extra(2.0, false);
        let original_handle_b = b.mid_point_a;
        let mut path = CurvePath::from_segments(vec![a, b]);

        smooth_path(&mut path, SmoothingPlan::JoinsOnly);

        assert_ne!(
            path.get(1).unwrap().mid_point_a,
            original_handle_b,
            "An der Relativ/Absolut-Naht muss angeglichen werden"
        );
    }

    #[test]
    fn test_missing_extra_counts_as_absolute_for_seam_detection() {
        // Ohne Extra gilt das Segment als absolut: keine Naht gegenüber
        // einem explizit absoluten Nachbarn
        let (a, b) = disjoint_pair();
        let b = b.with_extra(2.0, false);
        let original_handle_b = b.mid_point_a;
        let mut path = CurvePath::from_segments(vec![a, b]);

        smooth_path(&mut path, SmoothingPlan::JoinsOnly);

        assert_eq!(path.get(1).unwrap().mid_point_a, original_handle_b);
    }

    #[test]
    fn test_zero_length_handle_leaves_join_untouched() {
        // Auslaufendes Handle liegt auf dem Endpunkt: keine Richtung definierbar
        let a = CurveSegment::new(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        );
        let (_, b) = disjoint_pair();
        let original_handle_b = b.mid_point_a;
        let mut path = CurvePath::from_segments(vec![a.clone(), b]);

        smooth_path(&mut path, SmoothingPlan::FullPath);

        let first = path.get(0).unwrap();
        let second = path.get(1).unwrap();
        assert_eq!(second.start_point, a.end_point, "C0 gilt trotzdem");
        assert_eq!(first.mid_point_b, a.mid_point_b);
        assert_eq!(second.mid_point_a, original_handle_b);
    }

    #[test]
    fn test_smoothing_is_idempotent() {
        let (a, b) = disjoint_pair();
        let mut path = CurvePath::from_segments(vec![a, b]);

        smooth_path(&mut path, SmoothingPlan::FullPath);
        let once = path.clone();
        smooth_path(&mut path, SmoothingPlan::FullPath);

        for (s1, s2) in once.iter().zip(path.iter()) {
            assert!(s1.mid_point_b.abs_diff_eq(s2.mid_point_b, 1e-5));
            assert!(s1.mid_point_a.abs_diff_eq(s2.mid_point_a, 1e-5));
        }
    }

    #[test]
    fn test_short_paths_are_noops() {
        let mut empty = CurvePath::new();
        smooth_path(&mut empty, SmoothingPlan::FullPath);
        assert!(empty.is_empty());

        let single = CurveSegment::sample();
        let mut path = CurvePath::from_segments(vec![single.clone()]);
        smooth_path(&mut path, SmoothingPlan::FullPath);
        assert_eq!(path.segments(), &[single]);
    }

    #[test]
    fn test_three_segment_chain_is_continuous_everywhere() {
        let c = CurveSegment::new(
            Vec3::new(10.0, -3.0, 2.0),
            Vec3::new(11.0, -2.0, 2.0),
            Vec3::new(12.0, -2.0, 2.0),
            Vec3::new(13.0, -3.0, 2.0),
        );
        let (a, b) = disjoint_pair();
        let mut path = CurvePath::from_segments(vec![a, b, c]);

        smooth_path(&mut path, SmoothingPlan::FullPath);

        for pair in path.segments().windows(2) {
            assert_eq!(pair[1].start_point, pair[0].end_point);
        }
    }
}
