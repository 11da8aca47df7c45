//! Use-Case: Kurvenparameter setzen und Kurve zurücksetzen.

use crate::app::AppState;

/// Setzt `t` (geklemmt auf [0, 1]).
pub fn set_parameter(state: &mut AppState, value: f64) {
    if state.model.set_parameter(value) {
        state.request_repaint();
    }
}

/// "Neue Kurve": leert das Polygon und vergisst den Dateipfad.
pub fn clear_curve(state: &mut AppState) {
    let removed = state.model.point_count();
    state.model.clear();
    state.ui.current_file_path = None;
    state.ui.status_message = None;
    state.request_repaint();
    log::info!("Neue Kurve ({} Punkte verworfen)", removed);
}
