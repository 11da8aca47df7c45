//! Handler für Datei-Operationen (Öffnen, Speichern, PNG-Export).

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::CanvasImage;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt ein Kontrollpolygon aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, path)
}

/// Speichert das Kontrollpolygon.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(path) => use_cases::file_io::save_file_as(state, path),
        None => use_cases::file_io::save_current_file(state),
    }
}

/// Öffnet den PNG-Export-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::file_io::request_export_file(state);
}

/// Merkt das Export-Ziel bis zum nächsten Canvas-Screenshot vor.
pub fn queue_export(state: &mut AppState, path: String) {
    use_cases::file_io::queue_export(state, path);
}

/// Schreibt den Canvas-Screenshot als PNG.
pub fn write_export(state: &mut AppState, image: &CanvasImage) -> anyhow::Result<()> {
    use_cases::file_io::write_png_export(state, image)
}
