//! Repräsentiert ein einzelnes kubisches Bézier-Segment eines Flugpfads.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Zusatzdaten eines Segments (Animation und Koordinaten-Interpretation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathExtra {
    /// Abspieldauer des Segments in Sekunden
    pub duration: f32,
    /// true = Punkte sind relativ zum aktiven Platz gespeichert
    pub is_relative: bool,
}

impl Default for PathExtra {
    fn default() -> Self {
        Self {
            duration: 2.0,
            is_relative: false,
        }
    }
}

/// Ein kubisches Bézier-Segment mit vier Kontrollpunkten.
///
/// `start_point` und `end_point` liegen auf der Kurve, `mid_point_a` und
/// `mid_point_b` sind die Tangenten-Handles. Gleichheit ist strukturell
/// und exakt (kein Toleranzvergleich).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSegment {
    /// Startpunkt der Kurve
    pub start_point: Vec3,
    /// Erster Steuerpunkt (Tangente am Start)
    pub mid_point_a: Vec3,
    /// Zweiter Steuerpunkt (Tangente am Ende)
    pub mid_point_b: Vec3,
    /// Endpunkt der Kurve
    pub end_point: Vec3,
    /// Optionale Zusatzdaten (Dauer, Relativ-Flag)
    #[serde(default)]
    pub path_extra: Option<PathExtra>,
}

impl CurveSegment {
    /// Erstellt ein Segment ohne Zusatzdaten.
    pub fn new(start_point: Vec3, mid_point_a: Vec3, mid_point_b: Vec3, end_point: Vec3) -> Self {
        Self {
            start_point,
            mid_point_a,
            mid_point_b,
            end_point,
            path_extra: None,
        }
    }

    /// Setzt die Zusatzdaten (Builder-Stil).
    pub fn with_extra(mut self, duration: f32, is_relative: bool) -> Self {
        self.path_extra = Some(PathExtra {
            duration,
            is_relative,
        });
        self
    }

    /// Prüft ob das Segment relativ zum aktiven Platz gespeichert ist.
    /// Segmente ohne Zusatzdaten gelten als absolut.
    pub fn is_relative(&self) -> bool {
        self.path_extra.map_or(false, |e| e.is_relative)
    }

    /// Abspieldauer in Sekunden; ohne Zusatzdaten gilt die Standarddauer 2.0.
    pub fn duration(&self) -> f32 {
        self.path_extra.map_or(2.0, |e| e.duration)
    }

    /// Verschiebt alle vier Kontrollpunkte um `offset` — Zusatzdaten bleiben erhalten.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            start_point: self.start_point + offset,
            mid_point_a: self.mid_point_a + offset,
            mid_point_b: self.mid_point_b + offset,
            end_point: self.end_point + offset,
            path_extra: self.path_extra,
        }
    }

    /// Dokumentierter Ersatzwert für fehlende Segment-Daten.
    ///
    /// Eine kurze Aufwärtsbewegung vor dem mittleren Platz; absolut, 2 Sekunden.
    pub fn placeholder() -> Self {
        Self {
            start_point: Vec3::new(1.91, -0.91, 0.0),
            mid_point_a: Vec3::new(0.0, -0.62, 0.0),
            mid_point_b: Vec3::new(0.0, 0.35, 0.0),
            end_point: Vec3::new(0.0, 1.23, 0.0),
            path_extra: Some(PathExtra {
                duration: 2.0,
                is_relative: false,
            }),
        }
    }

    /// Beispiel-Segment des leeren Editors (diagonale S-Kurve durch den Ursprung).
    pub fn sample() -> Self {
        Self::new(
            Vec3::new(-2.0, -2.0, 1.0),
            Vec3::new(-1.0, 1.0, 4.0),
            Vec3::new(1.0, -1.0, -4.0),
            Vec3::new(2.0, 2.0, -1.0),
        )
    }
}
