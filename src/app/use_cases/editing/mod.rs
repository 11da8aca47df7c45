//! Use-Case-Funktionen für Kurven-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `points` — Punkte greifen, anhängen, verschieben, entfernen
//! - `parameter` — Kurvenparameter `t` und Zurücksetzen
mod parameter;
mod points;

pub use parameter::{clear_curve, set_parameter};
pub use points::{end_drag, move_dragged_point, press_primary, remove_point_at};
