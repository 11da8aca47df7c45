//! Bézier-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState, ViewToggle};
pub use core::{CurveModel, DragState, Evaluation, Point2D, PressOutcome};
pub use json::{load_points, save_points, CurveFileError};
pub use shared::{CanvasImage, EditorOptions, RenderScene};
