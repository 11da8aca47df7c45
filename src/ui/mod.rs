//! UI-Komponenten: Zeichenfläche, Control-Panel, Input-Handling, Dialoge.

/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Panels, Canvas, Dialoge).
/// Keyboard-Shortcuts und Maus-Input sind in eigene Dateien extrahiert.
pub mod canvas;
pub mod control_panel;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod status;

pub use canvas::{paint_scene, CanvasTransform};
pub use control_panel::render_control_panel;
pub use dialogs::handle_file_dialogs;
pub use input::collect_canvas_events;
pub use status::render_status_bar;

use crate::app::AppIntent;

/// Sammelt globale Tastenkürzel als AppIntents.
pub fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    keyboard::collect_keyboard_intents(ui)
}
