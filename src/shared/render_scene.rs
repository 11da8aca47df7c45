//! Render-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use super::options::EditorOptions;
use crate::core::{Point2D, SegmentLabel, TangentArrow};

/// Read-only Daten für einen Render-Frame.
///
/// Ausgeblendete Ansichten sind leer bzw. `None`; das UI muss die
/// Sichtbarkeits-Schalter nicht kennen.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpolygon in Einfügereihenfolge
    pub control_points: Vec<Point2D>,
    /// Gerade gezogener Punkt (für Hervorhebung)
    pub selected_index: Option<usize>,
    /// Aktueller Kurvenparameter
    pub t: f64,
    /// Abgetastete Kurve (leer bei < 2 Punkten oder ausgeblendet)
    pub curve: Vec<Point2D>,
    /// Marker P(t)
    pub point_at_t: Option<Point2D>,
    /// De-Casteljau-Stufen 1.. (Konstruktionslinien)
    pub construction_levels: Vec<Vec<Point2D>>,
    /// Normierter Tangentenpfeil bei t
    pub tangent: Option<TangentArrow>,
    /// Segmentlängen an den Segment-Mittelpunkten
    pub segment_labels: Vec<SegmentLabel>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob noch keine Kontrollpunkte existieren.
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }
}
