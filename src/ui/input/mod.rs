//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Positionen werden über [`CanvasTransform`] in normierte Koordinaten
//! umgerechnet. Drücke und Bewegungen außerhalb der Zeichenfläche werden
//! ignoriert; das Loslassen beendet einen Drag immer.

use super::canvas::CanvasTransform;
use crate::app::AppIntent;

/// Rohdaten des Zeigers für einen Frame.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PointerSnapshot {
    pub pos: Option<egui::Pos2>,
    pub primary_pressed: bool,
    pub secondary_pressed: bool,
    pub primary_released: bool,
    pub moved: bool,
}

impl PointerSnapshot {
    /// Liest den Zeigerzustand aus dem egui-Input.
    pub fn capture(ui: &egui::Ui) -> Self {
        ui.input(|i| Self {
            pos: i.pointer.interact_pos().or_else(|| i.pointer.hover_pos()),
            primary_pressed: i.pointer.button_pressed(egui::PointerButton::Primary),
            secondary_pressed: i.pointer.button_pressed(egui::PointerButton::Secondary),
            primary_released: i.pointer.button_released(egui::PointerButton::Primary),
            moved: i.pointer.delta() != egui::Vec2::ZERO,
        })
    }
}

/// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
pub fn collect_canvas_events(
    ui: &egui::Ui,
    response: &egui::Response,
    transform: &CanvasTransform,
) -> Vec<AppIntent> {
    let snapshot = PointerSnapshot::capture(ui);
    // Klicks auf überlagernde Fenster/Panels gehören nicht zur Zeichenfläche
    let hovered = response.contains_pointer();
    intents_from_pointer(&snapshot, hovered, transform)
}

/// Übersetzt einen Zeiger-Snapshot in Intents (egui-frei testbar).
pub(crate) fn intents_from_pointer(
    snapshot: &PointerSnapshot,
    hovered: bool,
    transform: &CanvasTransform,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let canvas_pos = snapshot
        .pos
        .filter(|&pos| hovered && transform.contains(pos))
        .map(|pos| transform.to_canvas(pos));

    if let Some(pos) = canvas_pos {
        if snapshot.primary_pressed {
            events.push(AppIntent::PrimaryPressed { pos });
        }
        if snapshot.secondary_pressed {
            events.push(AppIntent::SecondaryPressed { pos });
        }
        if snapshot.moved && !snapshot.primary_pressed {
            events.push(AppIntent::PointerMoved { pos });
        }
    }

    if snapshot.primary_released {
        events.push(AppIntent::PointerReleased);
    }

    events
}
