//! Parser für den JSON-Import von Segmentlisten.

use crate::core::CurveSegment;
use anyhow::{bail, Context, Result};

/// Parsed eine Segmentliste aus einem JSON-Array in kanonischer Form.
///
/// Erwartetes Format je Segment (camelCase-Felder): `startPoint`,
/// `midPointA`, `midPointB`, `endPoint` als `[x, y, z]`, optional
/// `pathExtra` mit `duration` und `isRelative`. Nicht-endliche Koordinaten
/// oder eine unbrauchbare Dauer werden mit Segment-Index abgewiesen, bevor
/// irgendetwas in den Zustand übernommen wird.
pub fn parse_segments_json(json_content: &str) -> Result<Vec<CurveSegment>> {
    let segments: Vec<CurveSegment> =
        serde_json::from_str(json_content).context("Segmentliste ist kein gültiges JSON-Array")?;

    for (index, segment) in segments.iter().enumerate() {
        validate_segment(segment).with_context(|| format!("Segment {} ist unbrauchbar", index))?;
    }

    Ok(segments)
}

fn validate_segment(segment: &CurveSegment) -> Result<()> {
    for (name, point) in [
        ("startPoint", segment.start_point),
        ("midPointA", segment.mid_point_a),
        ("midPointB", segment.mid_point_b),
        ("endPoint", segment.end_point),
    ] {
        if !point.is_finite() {
            bail!("{} enthält nicht-endliche Koordinaten: {:?}", name, point);
        }
    }

    if let Some(extra) = segment.path_extra {
        if !extra.duration.is_finite() || extra.duration <= 0.0 {
            bail!(
                "pathExtra.duration muss endlich und positiv sein: {}",
                extra.duration
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_parse_minimal_segment() {
        let json = r#"[{
            "startPoint": [-2, -2, 1],
            "midPointA": [-1, 1, 4],
            "midPointB": [1, -1, -4],
            "endPoint": [2, 2, -1]
        }]"#;

        let segments = parse_segments_json(json).expect("Parse muss klappen");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_point, Vec3::new(-2.0, -2.0, 1.0));
        assert!(segments[0].path_extra.is_none());
    }

    #[test]
    fn test_parse_segment_with_extra() {
        let json = r#"[{
            "startPoint": [0, 0, 0],
            "midPointA": [0, 1, 0],
            "midPointB": [1, 1, 0],
            "endPoint": [1, 0, 0],
            "pathExtra": { "duration": 3.5, "isRelative": true }
        }]"#;

        let segments = parse_segments_json(json).expect("Parse muss klappen");

        assert!(segments[0].is_relative());
        assert_eq!(segments[0].duration(), 3.5);
    }

    #[test]
    fn test_wrong_tuple_arity_is_rejected() {
        let json = r#"[{
            "startPoint": [0, 0],
            "midPointA": [0, 1, 0],
            "midPointB": [1, 1, 0],
            "endPoint": [1, 0, 0]
        }]"#;

        assert!(parse_segments_json(json).is_err());
    }

    #[test]
    fn test_overflowing_coordinate_is_rejected_with_index() {
        // 1e39 passt nicht in f32 und wird beim Deserialisieren zu inf
        let json = r#"[
            {
                "startPoint": [0, 0, 0],
                "midPointA": [0, 1, 0],
                "midPointB": [1, 1, 0],
                "endPoint": [1, 0, 0]
            },
            {
                "startPoint": [1e39, 0, 0],
                "midPointA": [0, 1, 0],
                "midPointB": [1, 1, 0],
                "endPoint": [1, 0, 0]
            }
        ]"#;

        let error = parse_segments_json(json).expect_err("Parse muss scheitern");
        assert!(format!("{:#}", error).contains("Segment 1"));
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let json = r#"[{
            "startPoint": [0, 0, 0],
            "midPointA": [0, 1, 0],
            "midPointB": [1, 1, 0],
            "endPoint": [1, 0, 0],
            "pathExtra": { "duration": 0, "isRelative": false }
        }]"#;

        assert!(parse_segments_json(json).is_err());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let segments = parse_segments_json("[]").expect("Parse muss klappen");
        assert!(segments.is_empty());
    }
}
