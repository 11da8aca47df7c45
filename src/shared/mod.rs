//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod canvas_image;
pub mod options;
mod render_scene;

pub use canvas_image::CanvasImage;
pub use options::EditorOptions;
pub use options::{DEFAULT_CURVE_FILE_NAME, DEFAULT_EXPORT_FILE_NAME};
pub use render_scene::RenderScene;
