//! Abbildung zwischen normierten Zeichenkoordinaten und Screen-Pixeln.

use crate::core::Point2D;
use glam::DVec2;

/// Bildet das Einheitsquadrat [0, 1]² auf ein zentriertes Quadrat im
/// Canvas-Rechteck ab. Die y-Achse zeigt nach oben.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    /// Screen-Position von (0, 0) (untere linke Ecke)
    origin: egui::Pos2,
    /// Pixel pro normierter Einheit
    scale: f32,
}

impl CanvasTransform {
    /// Rand um das Einheitsquadrat in Pixeln.
    pub const MARGIN_PX: f32 = 24.0;

    /// Erstellt die Transformation für das gegebene Canvas-Rechteck.
    pub fn new(rect: egui::Rect) -> Self {
        let side = (rect.width().min(rect.height()) - 2.0 * Self::MARGIN_PX).max(1.0);
        let center = rect.center();
        Self {
            origin: egui::pos2(center.x - side * 0.5, center.y + side * 0.5),
            scale: side,
        }
    }

    /// Normierte Koordinate → Screen-Pixel.
    pub fn to_screen(&self, p: Point2D) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + p.x as f32 * self.scale,
            self.origin.y - p.y as f32 * self.scale,
        )
    }

    /// Screen-Pixel → normierte Koordinate.
    pub fn to_canvas(&self, pos: egui::Pos2) -> Point2D {
        DVec2::new(
            f64::from((pos.x - self.origin.x) / self.scale),
            f64::from((self.origin.y - pos.y) / self.scale),
        )
    }

    /// Richtungsvektor in normierten Einheiten → Screen-Vektor.
    pub fn vector_to_screen(&self, v: DVec2) -> egui::Vec2 {
        egui::vec2(v.x as f32 * self.scale, -(v.y as f32) * self.scale)
    }

    /// Screen-Rechteck des Einheitsquadrats.
    pub fn unit_rect(&self) -> egui::Rect {
        egui::Rect::from_two_pos(
            self.to_screen(DVec2::new(0.0, 0.0)),
            self.to_screen(DVec2::new(1.0, 1.0)),
        )
    }

    /// Liegt die Screen-Position innerhalb der Zeichenfläche?
    pub fn contains(&self, pos: egui::Pos2) -> bool {
        self.unit_rect().contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn transform_800x600() -> CanvasTransform {
        CanvasTransform::new(egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(800.0, 600.0),
        ))
    }

    #[test]
    fn test_unit_square_is_centered_square() {
        let transform = transform_800x600();
        let rect = transform.unit_rect();
        let side = 600.0 - 2.0 * CanvasTransform::MARGIN_PX;

        assert_relative_eq!(rect.width(), side);
        assert_relative_eq!(rect.height(), side);
        assert_relative_eq!(rect.center().x, 400.0);
        assert_relative_eq!(rect.center().y, 300.0);
    }

    #[test]
    fn test_y_axis_points_up() {
        let transform = transform_800x600();
        let bottom_left = transform.to_screen(DVec2::new(0.0, 0.0));
        let top_left = transform.to_screen(DVec2::new(0.0, 1.0));

        assert!(top_left.y < bottom_left.y);
        assert_relative_eq!(top_left.x, bottom_left.x);
    }

    #[test]
    fn test_screen_canvas_inverse() {
        let transform = transform_800x600();
        let p = DVec2::new(0.25, 0.75);
        let back = transform.to_canvas(transform.to_screen(p));

        assert_relative_eq!(back.x, 0.25, epsilon = 1e-5);
        assert_relative_eq!(back.y, 0.75, epsilon = 1e-5);
    }

    #[test]
    fn test_contains_only_unit_square() {
        let transform = transform_800x600();
        assert!(transform.contains(egui::pos2(400.0, 300.0)));
        // Rand links vom Quadrat gehört nicht zur Zeichenfläche
        assert!(!transform.contains(egui::pos2(50.0, 300.0)));
    }

    #[test]
    fn test_vector_to_screen_flips_y() {
        let transform = transform_800x600();
        let v = transform.vector_to_screen(DVec2::new(0.0, 0.1));

        assert_relative_eq!(v.x, 0.0);
        assert!(v.y < 0.0);
    }
}
