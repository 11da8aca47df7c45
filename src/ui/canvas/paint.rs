//! Zeichnet die Render-Szene auf die Zeichenfläche.

use super::CanvasTransform;
use crate::core::Point2D;
use crate::shared::RenderScene;

const EMPTY_HINT: &str = "Klicken Sie, um Punkte hinzuzufügen";

const CURVE_WIDTH: f32 = 2.0;
const POLYGON_WIDTH: f32 = 1.0;
const CONSTRUCTION_WIDTH: f32 = 1.0;
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;
const LABEL_FONT_SIZE: f32 = 12.0;

/// Wandelt eine RGBA-Optionsfarbe (0..1) in eine egui-Farbe um.
fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

fn screen_points(transform: &CanvasTransform, points: &[Point2D]) -> Vec<egui::Pos2> {
    points.iter().map(|&p| transform.to_screen(p)).collect()
}

/// Zeichnet Hintergrund, Kontrollpolygon und alle sichtbaren Ansichten.
///
/// Reihenfolge von hinten nach vorne: Polygon, Konstruktion, Kurve,
/// Tangente, Beschriftungen, Marker.
pub fn paint_scene(painter: &egui::Painter, transform: &CanvasTransform, scene: &RenderScene) {
    let options = &scene.options;
    let unit_rect = transform.unit_rect();

    painter.rect_filled(unit_rect, 0.0, egui::Color32::WHITE);
    painter.rect_stroke(
        unit_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
        egui::StrokeKind::Outside,
    );

    if scene.is_empty() {
        painter.text(
            unit_rect.center(),
            egui::Align2::CENTER_CENTER,
            EMPTY_HINT,
            egui::FontId::proportional(18.0),
            egui::Color32::DARK_GRAY,
        );
        return;
    }

    let polygon_color = color32(options.control_polygon_color);
    let polygon = screen_points(transform, &scene.control_points);

    // Kontrollpolygon gestrichelt
    if polygon.len() >= 2 {
        painter.extend(egui::Shape::dashed_line(
            &polygon,
            egui::Stroke::new(POLYGON_WIDTH, polygon_color),
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }

    // De-Casteljau-Zwischenstufen
    for (i, level) in scene.construction_levels.iter().enumerate() {
        let color = color32(options.construction_color(i + 1));
        let level_points = screen_points(transform, level);
        if level_points.len() >= 2 {
            painter.extend(egui::Shape::dashed_line(
                &level_points,
                egui::Stroke::new(CONSTRUCTION_WIDTH, color),
                DASH_LENGTH,
                GAP_LENGTH,
            ));
        }
        for &pos in &level_points {
            painter.circle_filled(pos, 3.0, color);
        }
    }

    if scene.curve.len() >= 2 {
        painter.add(egui::Shape::line(
            screen_points(transform, &scene.curve),
            egui::Stroke::new(CURVE_WIDTH, color32(options.curve_color)),
        ));
    }

    if let Some(arrow) = scene.tangent {
        painter.arrow(
            transform.to_screen(arrow.origin),
            transform.vector_to_screen(arrow.vector),
            egui::Stroke::new(CURVE_WIDTH, color32(options.tangent_color)),
        );
    }

    let label_color = color32(options.length_label_color);
    for label in &scene.segment_labels {
        painter.text(
            transform.to_screen(label.midpoint),
            egui::Align2::CENTER_BOTTOM,
            format!("{:.3}", label.length),
            egui::FontId::proportional(LABEL_FONT_SIZE),
            label_color,
        );
    }

    // Kontrollpunkte, gegriffener Punkt hervorgehoben
    let selected_color = color32(options.selected_point_color);
    for (index, &pos) in polygon.iter().enumerate() {
        let color = if scene.selected_index == Some(index) {
            selected_color
        } else {
            polygon_color
        };
        painter.circle_filled(pos, options.point_radius_px, color);
    }

    if let Some(point) = scene.point_at_t {
        let pos = transform.to_screen(point);
        let color = color32(options.point_at_t_color);
        painter.circle_filled(pos, options.point_radius_px + 1.0, color);
        painter.text(
            pos + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("P({:.2})", scene.t),
            egui::FontId::proportional(LABEL_FONT_SIZE),
            color,
        );
    }
}
