//! Die festen Sitzplätze der Bühne, um die Flugpfade verankert werden.

use glam::Vec3;

/// Geordnete, nach der Initialisierung unveränderliche Liste von Platz-Positionen.
///
/// Relative Segmente werden gegen die Position des aktiven Platzes
/// interpretiert; die Tabelle selbst wird von keiner Operation mutiert.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatRing {
    positions: Vec<Vec3>,
}

impl SeatRing {
    /// Index des Standard-Platzes (vorne Mitte-rechts in der Neuner-Anordnung).
    pub const DEFAULT_SEAT: usize = 3;

    /// Erstellt einen Ring aus beliebigen Positionen.
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Die neun Plätze der Produktions-Bühne: ein erhöhter Platz hinten,
    /// darunter zwei Viererreihen.
    pub fn standard_nine() -> Self {
        Self::new(vec![
            Vec3::new(0.0, 4.9, 0.0),
            Vec3::new(-3.35, 2.1, 0.0),
            Vec3::new(-1.2, 2.1, 0.0),
            Vec3::new(1.2, 2.1, 0.0),
            Vec3::new(3.35, 2.1, 0.0),
            Vec3::new(-3.35, -0.35, 0.0),
            Vec3::new(-1.2, -0.35, 0.0),
            Vec3::new(1.2, -0.35, 0.0),
            Vec3::new(3.35, -0.35, 0.0),
        ])
    }

    /// Position eines Platzes, `None` bei ungültigem Index.
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }

    /// Read-only Sicht auf alle Positionen.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Prüft ob `index` auf einen existierenden Platz zeigt.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.positions.len()
    }

    /// Anzahl der Plätze.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn der Ring keine Plätze enthält.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for SeatRing {
    fn default() -> Self {
        Self::standard_nine()
    }
}
