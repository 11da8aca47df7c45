//! Use-Case: Kontrollpunkte per Zeiger bearbeiten.

use crate::app::AppState;
use crate::core::{Point2D, PressOutcome};

/// Primärer Klick: Treffer startet Drag, sonst wird ein Punkt angehängt.
pub fn press_primary(state: &mut AppState, pos: Point2D) {
    match state.model.primary_press(pos) {
        PressOutcome::Appended(_) => state.request_repaint(),
        PressOutcome::Selected(index) => {
            // Hervorhebung des gegriffenen Punkts
            state.request_repaint();
            log::debug!("Drag gestartet: Punkt {}", index);
        }
        PressOutcome::Ignored => {}
    }
}

/// Sekundärer Klick: entfernt den ersten Punkt innerhalb des Hit-Radius.
pub fn remove_point_at(state: &mut AppState, pos: Point2D) {
    if state.model.secondary_press(pos).is_some() {
        state.request_repaint();
    }
}

/// Zeigerbewegung während eines Drags.
pub fn move_dragged_point(state: &mut AppState, pos: Point2D) {
    if state.model.motion(pos) {
        state.request_repaint();
    }
}

/// Loslassen: Drag beenden.
pub fn end_drag(state: &mut AppState) {
    if state.model.selection().is_some() {
        state.request_repaint();
    }
    state.model.release();
}
