//! Die zentrale Pfad-Datenstruktur: eine geordnete Liste von Bézier-Segmenten.

use super::CurveSegment;

/// Vollständiger Flugpfad des Avatars.
///
/// Die Reihenfolge der Segmente ist die Abspielreihenfolge. Der Container
/// wird sowohl für den kanonischen Pfad (gemischt relativ/absolut) als auch
/// für die abgeleitete View (alles absolut) verwendet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvePath {
    segments: Vec<CurveSegment>,
}

impl CurvePath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Erstellt einen Pfad aus vorhandenen Segmenten (Reihenfolge bleibt erhalten).
    pub fn from_segments(segments: Vec<CurveSegment>) -> Self {
        Self { segments }
    }

    /// Hängt ein Segment ans Ende an.
    pub fn push(&mut self, segment: CurveSegment) {
        self.segments.push(segment);
    }

    /// Entfernt alle Segmente, die strukturell gleich `target` sind.
    ///
    /// Gibt die Anzahl der entfernten Segmente zurück; 0 wenn kein
    /// Segment übereinstimmt (der Pfad bleibt dann unverändert).
    pub fn remove_matching(&mut self, target: &CurveSegment) -> usize {
        let before = self.segments.len();
        self.segments.retain(|s| s != target);
        before - self.segments.len()
    }

    /// Entfernt alle Segmente.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Segment an Position `index`.
    pub fn get(&self, index: usize) -> Option<&CurveSegment> {
        self.segments.get(index)
    }

    /// Mutabler Zugriff auf das Segment an Position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CurveSegment> {
        self.segments.get_mut(index)
    }

    /// Erstes Segment des Pfads.
    pub fn first(&self) -> Option<&CurveSegment> {
        self.segments.first()
    }

    /// Letztes Segment des Pfads.
    pub fn last(&self) -> Option<&CurveSegment> {
        self.segments.last()
    }

    /// Iterator über alle Segmente (read-only).
    pub fn iter(&self) -> impl Iterator<Item = &CurveSegment> {
        self.segments.iter()
    }

    /// Read-only Sicht auf alle Segmente.
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Mutable Sicht auf alle Segmente (für In-Place-Glättung).
    pub fn segments_mut(&mut self) -> &mut [CurveSegment] {
        &mut self.segments
    }

    /// Anzahl der Segmente.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn der Pfad keine Segmente enthält.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Gesamte Abspieldauer des Pfads in Sekunden.
    pub fn total_duration(&self) -> f32 {
        self.segments.iter().map(|s| s.duration()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn segment_at(x: f32) -> CurveSegment {
        CurveSegment::new(
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x + 1.0, 1.0, 0.0),
            Vec3::new(x + 2.0, -1.0, 0.0),
            Vec3::new(x + 3.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_push_preserves_order() {
        let mut path = CurvePath::new();
        path.push(segment_at(0.0));
        path.push(segment_at(10.0));

        assert_eq!(path.len(), 2);
        assert_eq!(path.get(0).unwrap().start_point.x, 0.0);
        assert_eq!(path.last().unwrap().start_point.x, 10.0);
    }

    #[test]
    fn test_remove_matching_removes_all_duplicates() {
        let mut path = CurvePath::from_segments(vec![
            segment_at(0.0),
            segment_at(5.0),
            segment_at(0.0),
            segment_at(9.0),
        ]);

        let removed = path.remove_matching(&segment_at(0.0));
        assert_eq!(removed, 2, "Beide strukturgleichen Segmente müssen weg");
        assert_eq!(path.len(), 2);
        assert_eq!(path.get(0).unwrap().start_point.x, 5.0);
        assert_eq!(path.get(1).unwrap().start_point.x, 9.0);
    }

    #[test]
    fn test_remove_matching_absent_leaves_path_unchanged() {
        let mut path = CurvePath::from_segments(vec![segment_at(0.0), segment_at(5.0)]);
        let before = path.clone();

        let removed = path.remove_matching(&segment_at(99.0));
        assert_eq!(removed, 0);
        assert_eq!(path, before);
    }

    #[test]
    fn test_extra_distinguishes_removal_target() {
        // Gleiche Punkte, anderes Extra: darf nicht mit entfernt werden
        let plain = segment_at(0.0);
        let flagged = segment_at(0.0).with_extra(2.0, true);
        let mut path = CurvePath::from_segments(vec![plain.clone(), flagged.clone()]);

        let removed = path.remove_matching(&plain);
        assert_eq!(removed, 1);
        assert_eq!(path.segments(), &[flagged]);
    }

    #[test]
    fn test_clear_and_total_duration() {
        let mut path = CurvePath::from_segments(vec![
            segment_at(0.0).with_extra(1.5, false),
            segment_at(5.0), // ohne Extra: Standarddauer 2.0
        ]);
        assert_eq!(path.total_duration(), 3.5);

        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.total_duration(), 0.0);
    }
}
