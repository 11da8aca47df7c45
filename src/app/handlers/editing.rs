//! Handler für Kurven-Editing (Punkte, Drag, Parameter).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point2D;

/// Greift einen Punkt oder hängt einen neuen an.
pub fn press_primary(state: &mut AppState, pos: Point2D) {
    use_cases::editing::press_primary(state, pos);
}

/// Entfernt den ersten getroffenen Punkt.
pub fn remove_point_at(state: &mut AppState, pos: Point2D) {
    use_cases::editing::remove_point_at(state, pos);
}

/// Verschiebt den gegriffenen Punkt.
pub fn move_dragged(state: &mut AppState, pos: Point2D) {
    use_cases::editing::move_dragged_point(state, pos);
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Setzt den Kurvenparameter `t`.
pub fn set_parameter(state: &mut AppState, value: f64) {
    use_cases::editing::set_parameter(state, value);
}

/// Leert das Kontrollpolygon.
pub fn clear_curve(state: &mut AppState) {
    use_cases::editing::clear_curve(state);
}
