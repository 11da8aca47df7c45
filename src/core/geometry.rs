//! Geometrie-Kernel für Bézier-Kurven beliebigen Grades.
//!
//! Reine Funktionen ohne Zustand: De-Casteljau-Auswertung inkl. Zwischenstufen,
//! Tangente über den Hodographen, Segmentlängen und Hit-Test.
//! Der Parameter `t` wird hier **nicht** geklemmt.

use super::Point2D;
use glam::DVec2;

/// Ergebnis einer De-Casteljau-Auswertung.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Kurvenpunkt B(t) (einziger Punkt der letzten Stufe)
    pub point: Point2D,
    /// Vollständige Pyramide: Stufe 0 = Eingabepunkte, letzte Stufe = `[point]`
    pub levels: Vec<Vec<Point2D>>,
}

impl Evaluation {
    /// Zwischenstufen ohne Stufe 0 (für die Konstruktionslinien-Überlagerung).
    pub fn construction_levels(&self) -> &[Vec<Point2D>] {
        self.levels.get(1..).unwrap_or(&[])
    }
}

/// Wertet die Kurve per De-Casteljau bei `t` aus und behält alle Stufen.
///
/// Jede Stufe ersetzt n Punkte durch n−1 Punkte `(1−t)·pᵢ + t·pᵢ₊₁`, bis nur
/// noch ein Punkt übrig ist. Bei einem einzelnen Eingabepunkt besteht die
/// Pyramide nur aus Stufe 0. Leere Eingabe → `None`.
///
/// O(n²) Zeit und Speicher; NaN/∞ werden nicht abgefangen, sondern propagiert.
pub fn evaluate(points: &[Point2D], t: f64) -> Option<Evaluation> {
    if points.is_empty() {
        return None;
    }

    let mut levels = Vec::with_capacity(points.len());
    levels.push(points.to_vec());

    let mut current = points.to_vec();
    while current.len() > 1 {
        let next: Vec<Point2D> = current
            .windows(2)
            .map(|pair| (1.0 - t) * pair[0] + t * pair[1])
            .collect();
        levels.push(next.clone());
        current = next;
    }

    Some(Evaluation {
        point: current[0],
        levels,
    })
}

/// Erste Ableitung der Kurve bei `t` (analytisch über den Hodographen).
///
/// Differenzvektoren `pᵢ₊₁ − pᵢ` werden per [`evaluate`] ausgewertet und mit
/// dem Grad `n−1` skaliert. Weniger als 2 Punkte → keine Tangente.
pub fn tangent(points: &[Point2D], t: f64) -> Option<DVec2> {
    if points.len() < 2 {
        return None;
    }
    let degree = (points.len() - 1) as f64;
    let hodograph: Vec<DVec2> = points.windows(2).map(|pair| pair[1] - pair[0]).collect();
    evaluate(&hodograph, t).map(|eval| eval.point * degree)
}

/// Euklidische Länge jedes Kontrollpolygon-Segments in Polygon-Reihenfolge.
pub fn segment_lengths(points: &[Point2D]) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .collect()
}

/// Index des ersten Punkts (Einfügereihenfolge), der strikt näher als `radius`
/// an `query` liegt.
///
/// Bei überlappenden Punkten gewinnt immer der zuerst eingefügte, bei
/// Selektion wie beim Löschen.
pub fn nearest_point_index(points: &[Point2D], query: Point2D, radius: f64) -> Option<usize> {
    points.iter().position(|p| p.distance(query) < radius)
}

/// Tastet die Kurve an `samples` gleichverteilten t-Werten in [0, 1] ab
/// (inklusive beider Endpunkte, mindestens 2 Samples).
///
/// Weniger als 2 Kontrollpunkte → leere Polylinie (noch keine Kurve).
pub fn sample_curve(points: &[Point2D], samples: usize) -> Vec<Point2D> {
    if points.len() < 2 {
        return Vec::new();
    }
    let samples = samples.max(2);
    let last = (samples - 1) as f64;
    (0..samples)
        .filter_map(|i| evaluate(points, i as f64 / last).map(|eval| eval.point))
        .collect()
}

/// Normalisiert `v` und skaliert auf `length`.
///
/// Nullvektor oder nicht-endliche Komponenten → `None` (nichts zu zeichnen).
pub fn scaled_direction(v: DVec2, length: f64) -> Option<DVec2> {
    v.try_normalize().map(|dir| dir * length)
}
