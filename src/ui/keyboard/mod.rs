//! Keyboard-Shortcuts für den Editor.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_n, key_o, key_s, key_e, key_q) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::Q),
        )
    });

    if !modifiers.command {
        return events;
    }

    // Ctrl+N (Neue Kurve), Ctrl+O (Öffnen), Ctrl+S / Ctrl+Shift+S (Speichern)
    if key_n {
        events.push(AppIntent::NewCurveRequested);
    }

    if key_o {
        events.push(AppIntent::OpenFileRequested);
    }

    if key_s {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    // Ctrl+E (PNG-Export), Ctrl+Q (Beenden)
    if key_e {
        events.push(AppIntent::ExportPngRequested);
    }

    if key_q {
        events.push(AppIntent::ExitRequested);
    }

    events
}
