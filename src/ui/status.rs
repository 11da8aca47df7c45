//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::DragState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.point_count()));

            ui.separator();

            ui.label(format!("t = {:.2}", state.model.t()));

            ui.separator();

            match state.model.drag_state() {
                DragState::Idle => ui.label("Bereit"),
                DragState::Dragging(index) => ui.label(format!("Ziehe Punkt {}", index)),
            };

            if let Some(ref path) = state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Datei: {}", filename));
            }

            // Statusnachricht (Laden, Speichern, Export, Fehler)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }
        });
    });
}
