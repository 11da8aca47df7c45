//! Core-Domäne: Geometrie-Kernel und Kurvenmodell.

/// Reine Bézier-Geometrie (De Casteljau, Hodograph, Hit-Test)
pub mod geometry;
/// Kontrollpolygon + Drag-Zustandsautomat
pub mod curve_model;

pub use curve_model::{
    CurveModel, DragState, PressOutcome, SegmentLabel, TangentArrow, DEFAULT_T, HIT_RADIUS,
};
pub use geometry::Evaluation;

/// 2D-Punkt in normierten Zeichenkoordinaten (konventionell [0, 1]²).
pub type Point2D = glam::DVec2;
