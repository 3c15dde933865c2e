//! Writer für den Parameter-Export als Textblock.

use crate::core::{CurvePath, CurveSegment};
use glam::Vec3;

/// Formatiert den Pfad als menschenlesbaren Textblock, ein Segment pro
/// Absatz (Leerzeile als Trenner).
///
/// Das Format ist für die Zwischenablage und Sichtkontrolle gedacht, nicht
/// für maschinellen Re-Import. `R:`/`D:` zeigen `-`, wenn das Segment kein
/// Extra trägt.
pub fn export_curve_text(path: &CurvePath) -> String {
    let mut output = String::new();
    for segment in path.iter() {
        output.push_str(&format_segment_line(segment));
        output.push_str("\n\n");
    }
    output
}

fn format_segment_line(segment: &CurveSegment) -> String {
    let (relative, duration) = match segment.path_extra {
        Some(extra) => (extra.is_relative.to_string(), format!("{}", extra.duration)),
        None => ("-".to_string(), "-".to_string()),
    };
    format!(
        "S:({}). A:({}). B:({}), E:({}), R:({}), D:({})",
        format_point(segment.start_point),
        format_point(segment.mid_point_a),
        format_point(segment.mid_point_b),
        format_point(segment.end_point),
        relative,
        duration,
    )
}

fn format_point(point: Vec3) -> String {
    format!("{},{},{}", point.x, point.y, point.z)
}
