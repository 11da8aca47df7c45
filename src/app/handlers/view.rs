//! Handler für Sichtbarkeit der abgeleiteten Ansichten.

use crate::app::{AppState, ViewToggle};

/// Blendet eine Ansicht ein oder aus.
pub fn set_visibility(state: &mut AppState, view: ViewToggle, visible: bool) {
    if state.view.is_visible(view) == visible {
        return;
    }
    state.view.set_visible(view, visible);
    state.request_repaint();
    log::debug!("Ansicht {:?}: {}", view, if visible { "an" } else { "aus" });
}
