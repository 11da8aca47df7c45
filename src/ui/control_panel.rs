//! Control-Panel: Kurvenparameter, Datei-Aktionen und Ansichts-Schalter.

use crate::app::{AppIntent, AppState, ViewToggle};

/// Rendert das Control-Panel rechts und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("control_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Bézier-Kurve");
            ui.separator();

            // ── Parameter t ──
            let mut t = state.model.t();
            let slider = egui::Slider::new(&mut t, 0.0..=1.0)
                .text("t")
                .fixed_decimals(2);
            if ui.add(slider).changed() {
                events.push(AppIntent::ParameterChanged { value: t });
            }

            ui.separator();

            // ── Datei ──
            ui.horizontal_wrapped(|ui| {
                if ui.button("Neue Kurve").clicked() {
                    events.push(AppIntent::NewCurveRequested);
                }
                if ui.button("Laden").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveRequested);
                }
                if ui.button("Speichern unter…").clicked() {
                    events.push(AppIntent::SaveAsRequested);
                }
                if ui.button("Export PNG").clicked() {
                    events.push(AppIntent::ExportPngRequested);
                }
            });

            ui.separator();

            // ── Ansichten ──
            ui.label("Anzeigen:");
            for view in ViewToggle::ALL {
                let mut visible = state.view.is_visible(view);
                if ui.checkbox(&mut visible, view.label()).changed() {
                    events.push(AppIntent::ToggleView { view, visible });
                }
            }

            ui.separator();
            ui.small("Links: Punkt setzen / ziehen\nRechts: Punkt löschen");
        });

    events
}
