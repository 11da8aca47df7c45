//! Zeichenfläche: Koordinaten-Transformation und Szenen-Painter.
//!
//! - `transform` — normierte Zeichenkoordinaten ↔ Screen-Pixel
//! - `paint` — zeichnet eine `RenderScene` mit dem egui-Painter

mod paint;
mod transform;

pub use paint::paint_scene;
pub use transform::CanvasTransform;
