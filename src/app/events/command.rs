use crate::core::{CurveSegment, SmoothingPlan};

/// Partielles Update für die vier Kontrollpunkte eines Segments.
/// `None`-Felder bleiben unverändert; `path_extra` ist kein Teil des Patches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentPatch {
    /// Neuer Startpunkt (View-Koordinaten)
    pub start_point: Option<glam::Vec3>,
    /// Neuer erster Handle
    pub mid_point_a: Option<glam::Vec3>,
    /// Neuer zweiter Handle
    pub mid_point_b: Option<glam::Vec3>,
    /// Neuer Endpunkt (View-Koordinaten)
    pub end_point: Option<glam::Vec3>,
}

impl SegmentPatch {
    /// Patch, der nur den Startpunkt setzt.
    pub fn start(point: glam::Vec3) -> Self {
        Self {
            start_point: Some(point),
            ..Self::default()
        }
    }

    /// Patch, der nur den Endpunkt setzt.
    pub fn end(point: glam::Vec3) -> Self {
        Self {
            end_point: Some(point),
            ..Self::default()
        }
    }

    /// Wendet den Patch auf ein Segment an; `None`-Felder bleiben stehen.
    pub fn apply_to(&self, segment: &mut CurveSegment) {
        if let Some(p) = self.start_point {
            segment.start_point = p;
        }
        if let Some(p) = self.mid_point_a {
            segment.mid_point_a = p;
        }
        if let Some(p) = self.mid_point_b {
            segment.mid_point_b = p;
        }
        if let Some(p) = self.end_point {
            segment.end_point = p;
        }
    }
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Kontrollpunkte eines Segments in der View-Darstellung ändern
    UpdateSegment { index: usize, patch: SegmentPatch },
    /// Segment in Speicher-Koordinaten ans Ende anhängen
    AddSegment { segment: CurveSegment },
    /// Pfad um ein generiertes Folgesegment verlängern
    ExtendPath { is_relative: bool, duration: f32 },
    /// Segment per Wertvergleich entfernen
    RemoveSegment { segment: CurveSegment },
    /// Alle Segmente verwerfen
    ClearSegments,
    /// Aktiven Bühnenplatz wechseln und View neu ableiten
    SetActiveSeat { index: usize, plan: SmoothingPlan },
    /// Pfad glätten (C0/C1 an den Übergängen)
    SmoothPath { plan: SmoothingPlan },
    /// Animations-Wiedergabe ein- oder ausschalten
    SetPlayAnimation { playing: bool },
    /// Segmentliste komplett ersetzen (z.B. aus JSON-Import)
    ImportSegments { segments: Vec<CurveSegment> },
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,
}
