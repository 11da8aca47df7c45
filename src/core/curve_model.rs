//! Kurvenmodell: Kontrollpolygon, Parameter `t` und Drag-Zustandsautomat.
//!
//! Das Modell besitzt die Punktfolge exklusiv. Alle Geometrie delegiert es an
//! [`super::geometry`]; abgeleitete Ansichten werden bei jedem Zugriff neu
//! berechnet und nie zwischengespeichert.

use super::geometry::{self, Evaluation};
use super::Point2D;
use glam::DVec2;

/// Standard-Hit-Radius (normierte Zeichenfläche) für Selektion und Löschen.
pub const HIT_RADIUS: f64 = 0.02;

/// Startwert des Kurvenparameters.
pub const DEFAULT_T: f64 = 0.5;

/// Zustand des Drag-Automaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Punkt gegriffen
    #[default]
    Idle,
    /// Punkt mit diesem Index wird gerade verschoben
    Dragging(usize),
}

/// Ergebnis eines primären Klicks (Links-Klick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Bestehender Punkt getroffen → Drag gestartet, Polygon unverändert
    Selected(usize),
    /// Kein Treffer → neuer Punkt am Ende angehängt
    Appended(usize),
    /// Während eines laufenden Drags ignoriert
    Ignored,
}

/// Tangentenpfeil für die Anzeige: Ursprung im Kurvenpunkt, feste Länge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentArrow {
    pub origin: Point2D,
    pub vector: DVec2,
}

/// Längen-Beschriftung eines Kontrollpolygon-Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLabel {
    /// Segment-Mittelpunkt (Position der Beschriftung)
    pub midpoint: Point2D,
    /// Euklidische Segmentlänge
    pub length: f64,
}

/// Bézier-Kurve über einem geordneten Kontrollpolygon.
#[derive(Debug, Clone)]
pub struct CurveModel {
    points: Vec<Point2D>,
    t: f64,
    drag: DragState,
    hit_radius: f64,
}

impl CurveModel {
    /// Erstellt ein leeres Modell mit Standard-Hit-Radius.
    pub fn new() -> Self {
        Self::with_hit_radius(HIT_RADIUS)
    }

    /// Erstellt ein leeres Modell mit eigenem Hit-Radius.
    pub fn with_hit_radius(hit_radius: f64) -> Self {
        Self {
            points: Vec::new(),
            t: DEFAULT_T,
            drag: DragState::Idle,
            hit_radius,
        }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Aktueller Kurvenparameter (immer in [0, 1]).
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Index des gerade gezogenen Punkts.
    pub fn selection(&self) -> Option<usize> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(index) => Some(index),
        }
    }

    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    pub fn set_hit_radius(&mut self, hit_radius: f64) {
        self.hit_radius = hit_radius;
    }

    /// True sobald mindestens 2 Punkte existieren.
    pub fn has_curve(&self) -> bool {
        self.points.len() >= 2
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Primärer Klick bei `pos`: Treffer startet Drag, sonst wird angehängt.
    pub fn primary_press(&mut self, pos: Point2D) -> PressOutcome {
        if self.drag != DragState::Idle {
            return PressOutcome::Ignored;
        }

        if let Some(index) = geometry::nearest_point_index(&self.points, pos, self.hit_radius) {
            log::debug!("Punkt {} gegriffen", index);
            self.drag = DragState::Dragging(index);
            PressOutcome::Selected(index)
        } else {
            self.points.push(pos);
            let index = self.points.len() - 1;
            log::debug!(
                "Punkt {} hinzugefügt: ({:.3}, {:.3})",
                index,
                pos.x,
                pos.y
            );
            PressOutcome::Appended(index)
        }
    }

    /// Sekundärer Klick bei `pos`: entfernt den ersten getroffenen Punkt.
    ///
    /// Jede Entfernung beendet einen laufenden Drag, damit kein Index auf
    /// eine verschobene Position zeigen kann.
    pub fn secondary_press(&mut self, pos: Point2D) -> Option<usize> {
        let index = geometry::nearest_point_index(&self.points, pos, self.hit_radius)?;
        self.points.remove(index);
        self.drag = DragState::Idle;
        log::debug!("Punkt {} entfernt ({} verbleibend)", index, self.points.len());
        Some(index)
    }

    /// Zeigerbewegung: verschiebt den gegriffenen Punkt auf `pos`.
    ///
    /// Gibt `true` zurück, wenn sich das Polygon geändert hat.
    pub fn motion(&mut self, pos: Point2D) -> bool {
        let DragState::Dragging(index) = self.drag else {
            return false;
        };
        debug_assert!(
            index < self.points.len(),
            "Drag-Index {} außerhalb des Polygons ({} Punkte)",
            index,
            self.points.len()
        );
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = pos;
                true
            }
            None => false,
        }
    }

    /// Loslassen: immer zurück nach `Idle`.
    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Setzt `t` (auf [0, 1] geklemmt). NaN wird verworfen.
    ///
    /// Gibt `true` zurück, wenn sich der Wert geändert hat.
    pub fn set_parameter(&mut self, value: f64) -> bool {
        if value.is_nan() {
            log::warn!("Ungültiger Kurvenparameter verworfen: NaN");
            return false;
        }
        let clamped = value.clamp(0.0, 1.0);
        let changed = clamped != self.t;
        self.t = clamped;
        changed
    }

    /// Leert das Polygon ("Neue Kurve").
    pub fn clear(&mut self) {
        self.points.clear();
        self.drag = DragState::Idle;
    }

    /// Ersetzt das Polygon vollständig (Laden aus Datei).
    pub fn replace(&mut self, points: Vec<Point2D>) {
        self.points = points;
        self.drag = DragState::Idle;
    }

    // ── Abgeleitete Ansichten ───────────────────────────────────────

    /// De-Casteljau-Auswertung beim aktuellen `t` (mindestens 1 Punkt).
    pub fn evaluation(&self) -> Option<Evaluation> {
        geometry::evaluate(&self.points, self.t)
    }

    /// Kurven-Polylinie mit `samples` gleichverteilten Stützstellen.
    pub fn curve_polyline(&self, samples: usize) -> Vec<Point2D> {
        geometry::sample_curve(&self.points, samples)
    }

    /// Kurvenpunkt B(t); erst ab 2 Kontrollpunkten.
    pub fn point_at_t(&self) -> Option<Point2D> {
        if !self.has_curve() {
            return None;
        }
        self.evaluation().map(|eval| eval.point)
    }

    /// Zwischenstufen der De-Casteljau-Pyramide ohne Stufe 0.
    pub fn construction_levels(&self) -> Vec<Vec<Point2D>> {
        self.evaluation()
            .map(|eval| eval.construction_levels().to_vec())
            .unwrap_or_default()
    }

    /// Tangente bei `t`, normiert auf `display_length`.
    ///
    /// `None` bei weniger als 2 Punkten oder verschwindender Ableitung.
    pub fn tangent_arrow(&self, display_length: f64) -> Option<TangentArrow> {
        let derivative = geometry::tangent(&self.points, self.t)?;
        let vector = geometry::scaled_direction(derivative, display_length)?;
        let origin = self.evaluation()?.point;
        Some(TangentArrow { origin, vector })
    }

    /// Segmentlängen mit Mittelpunkt als Beschriftungsposition.
    pub fn segment_labels(&self) -> Vec<SegmentLabel> {
        self.points
            .windows(2)
            .zip(geometry::segment_lengths(&self.points))
            .map(|(pair, length)| SegmentLabel {
                midpoint: (pair[0] + pair[1]) * 0.5,
                length,
            })
            .collect()
    }
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
