//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Alle abgeleiteten Ansichten werden hier frisch aus dem Modell berechnet;
/// ausgeblendete Ansichten bleiben leer.
pub fn build(state: &AppState) -> RenderScene {
    let model = &state.model;
    let view = &state.view;
    let options = &state.options;

    let curve = if view.show_curve {
        model.curve_polyline(options.curve_samples)
    } else {
        Vec::new()
    };

    let point_at_t = if view.show_point_at_t {
        model.point_at_t()
    } else {
        None
    };

    // Konstruktionslinien erst ab einer echten Kurve
    let construction_levels = if view.show_construction && model.has_curve() {
        model.construction_levels()
    } else {
        Vec::new()
    };

    let tangent = if view.show_tangent {
        model.tangent_arrow(options.tangent_display_length)
    } else {
        None
    };

    let segment_labels = if view.show_lengths {
        model.segment_labels()
    } else {
        Vec::new()
    };

    RenderScene {
        control_points: model.points().to_vec(),
        selected_index: model.selection(),
        t: model.t(),
        curve,
        point_at_t,
        construction_levels,
        tangent,
        segment_labels,
        options: options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::{AppState, ViewToggle};
    use crate::core::Point2D;

    fn parabola_state() -> AppState {
        let mut state = AppState::new();
        state.model.replace(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.5, 1.0),
            Point2D::new(1.0, 0.0),
        ]);
        state
    }

    #[test]
    fn build_respects_default_toggles() {
        let state = parabola_state();

        let scene = build(&state);
        assert_eq!(scene.control_points.len(), 3);
        assert_eq!(scene.curve.len(), state.options.curve_samples);
        assert_eq!(scene.point_at_t, Some(Point2D::new(0.5, 0.5)));
        assert!(scene.construction_levels.is_empty());
        assert!(scene.tangent.is_none());
        assert!(scene.segment_labels.is_empty());
    }

    #[test]
    fn build_includes_enabled_construction_views() {
        let mut state = parabola_state();
        state.view.set_visible(ViewToggle::Construction, true);
        state.view.set_visible(ViewToggle::Tangent, true);
        state.view.set_visible(ViewToggle::Lengths, true);
        state.view.set_visible(ViewToggle::Curve, false);

        let scene = build(&state);
        assert!(scene.curve.is_empty());
        assert_eq!(scene.construction_levels.len(), 2);
        assert!(scene.tangent.is_some());
        assert_eq!(scene.segment_labels.len(), 2);
    }

    #[test]
    fn build_single_point_has_no_curve_views() {
        let mut state = AppState::new();
        state.model.replace(vec![Point2D::new(0.5, 0.5)]);
        state.view.set_visible(ViewToggle::Construction, true);
        state.view.set_visible(ViewToggle::Tangent, true);

        let scene = build(&state);
        assert!(!scene.is_empty());
        assert!(scene.curve.is_empty());
        assert!(scene.point_at_t.is_none());
        assert!(scene.construction_levels.is_empty());
        assert!(scene.tangent.is_none());
    }

    #[test]
    fn build_marks_dragged_point() {
        let mut state = parabola_state();
        state.model.primary_press(Point2D::new(0.5, 1.0));

        let scene = build(&state);
        assert_eq!(scene.selected_index, Some(1));
    }
}
