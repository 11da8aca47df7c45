//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{DEFAULT_T, HIT_RADIUS};
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl gleichverteilter t-Werte für die Kurven-Polylinie.
pub const CURVE_SAMPLES: usize = 200;
/// Länge des Tangentenpfeils in normierten Koordinaten.
pub const TANGENT_DISPLAY_LENGTH: f64 = 0.07;

// ── Dateien ─────────────────────────────────────────────────────────

/// Vorgeschlagener Dateiname beim Speichern.
pub const DEFAULT_CURVE_FILE_NAME: &str = "bezier-curve.json";
/// Vorgeschlagener Dateiname beim PNG-Export.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "bezier-curve.png";

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Marker in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Kontrollpolygon (RGBA: Grau).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Gegriffener Kontrollpunkt (RGBA: Orange).
pub const SELECTED_POINT_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Bézier-Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Kurvenpunkt P(t) (RGBA: Rot).
pub const POINT_AT_T_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Tangentenpfeil (RGBA: Grün).
pub const TANGENT_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Segmentlängen-Beschriftung (RGBA: Lila).
pub const LENGTH_LABEL_COLOR: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
/// Farbzyklus für die De-Casteljau-Zwischenstufen.
pub const CONSTRUCTION_COLORS: [[f32; 4]; 5] = [
    [1.0, 0.5, 0.05, 1.0],
    [0.17, 0.63, 0.17, 1.0],
    [0.84, 0.15, 0.16, 1.0],
    [0.58, 0.4, 0.74, 1.0],
    [0.55, 0.34, 0.29, 1.0],
];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Editieren ───────────────────────────────────────────────
    /// Hit-Radius für Selektion und Löschen (normierte Koordinaten)
    pub hit_radius: f64,
    /// Startwert des Kurvenparameters
    pub initial_t: f64,

    // ── Abgeleitete Ansichten ───────────────────────────────────
    /// Stützstellen der Kurven-Polylinie
    pub curve_samples: usize,
    /// Länge des normierten Tangentenpfeils
    pub tangent_display_length: f64,
    /// Sichtbarkeit beim Start
    pub show_curve: bool,
    pub show_point_at_t: bool,
    pub show_construction: bool,
    pub show_tangent: bool,
    pub show_lengths: bool,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Kontrollpunkt-Marker in Pixeln
    pub point_radius_px: f32,
    pub control_polygon_color: [f32; 4],
    pub selected_point_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub point_at_t_color: [f32; 4],
    pub tangent_color: [f32; 4],
    pub length_label_color: [f32; 4],
    /// Farbzyklus der Konstruktionslinien (leer → Polygonfarbe)
    pub construction_colors: Vec<[f32; 4]>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_radius: HIT_RADIUS,
            initial_t: DEFAULT_T,

            curve_samples: CURVE_SAMPLES,
            tangent_display_length: TANGENT_DISPLAY_LENGTH,
            show_curve: true,
            show_point_at_t: true,
            show_construction: false,
            show_tangent: false,
            show_lengths: false,

            point_radius_px: POINT_RADIUS_PX,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            selected_point_color: SELECTED_POINT_COLOR,
            curve_color: CURVE_COLOR,
            point_at_t_color: POINT_AT_T_COLOR,
            tangent_color: TANGENT_COLOR,
            length_label_color: LENGTH_LABEL_COLOR,
            construction_colors: CONSTRUCTION_COLORS.to_vec(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
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
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_editor.toml")
    }

    /// Farbe der Konstruktionsstufe `level` (1-basiert, zyklisch).
    pub fn construction_color(&self, level: usize) -> [f32; 4] {
        if self.construction_colors.is_empty() {
            return self.control_polygon_color;
        }
        let idx = level.saturating_sub(1) % self.construction_colors.len();
        self.construction_colors[idx]
    }

    /// Korrigiert Werte, mit denen das Modell nicht sinnvoll arbeiten kann.
    fn sanitized(mut self) -> Self {
        if !(self.hit_radius.is_finite() && self.hit_radius > 0.0) {
            log::warn!(
                "hit_radius {} ungültig, verwende {}",
                self.hit_radius,
                HIT_RADIUS
            );
            self.hit_radius = HIT_RADIUS;
        }
        if self.initial_t.is_nan() {
            self.initial_t = DEFAULT_T;
        }
        self.initial_t = self.initial_t.clamp(0.0, 1.0);
        self.curve_samples = self.curve_samples.max(2);
        self
    }
}
