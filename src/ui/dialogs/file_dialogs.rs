use crate::app::{AppIntent, UiState};
use crate::shared::{DEFAULT_CURVE_FILE_NAME, DEFAULT_EXPORT_FILE_NAME};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Dateiname der aktuellen Kurve, sonst der Standardname.
fn suggested_file_name(current: Option<&String>, fallback: &'static str) -> String {
    current
        .and_then(|p| std::path::Path::new(p).file_name())
        .and_then(|n| n.to_str())
        .unwrap_or(fallback)
        .to_string()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bézier-Kurve", &["json"])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let default_name =
            suggested_file_name(ui_state.current_file_path.as_ref(), DEFAULT_CURVE_FILE_NAME);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bézier-Kurve", &["json"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // PNG-Export-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG-Bild", &["png"])
            .set_file_name(DEFAULT_EXPORT_FILE_NAME)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
