//! Zentrale Konfiguration für den StageFlight Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::SmoothingPlan;

// ── Segmente ────────────────────────────────────────────────────────

/// Standarddauer neuer Segmente in Sekunden.
pub const DEFAULT_SEGMENT_DURATION: f32 = 2.0;
/// Schrittweite der Pfad-Verlängerung (Vielfache der Tangenten-Richtung).
pub const EXTENSION_STEP: f32 = 0.4;

// ── Darstellung ─────────────────────────────────────────────────────

/// Abtastpunkte pro Segment beim Polyline-Sampling.
pub const CURVE_SAMPLES: usize = 50;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `stage_flight_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Segmente ────────────────────────────────────────────────
    /// Dauer neuer Segmente in Sekunden
    pub default_duration: f32,
    /// Schrittweite der Pfad-Verlängerung
    pub extension_step: f32,

    // ── Glättung ────────────────────────────────────────────────
    /// Standard-Plan für Glättung beim Platzwechsel
    pub default_plan: SmoothingPlan,

    // ── Darstellung ─────────────────────────────────────────────
    /// Abtastpunkte pro Segment
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_SEGMENT_DURATION,
            extension_step: EXTENSION_STEP,
            default_plan: SmoothingPlan::default(),
            curve_samples: CURVE_SAMPLES,
            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `curve_samples` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_curve_samples() -> usize {
    CURVE_SAMPLES
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("stage_flight_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("stage_flight_editor.toml")
    }
}
