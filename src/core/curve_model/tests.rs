use super::*;
use approx::assert_relative_eq;
use glam::DVec2;

fn model_with(points: &[(f64, f64)]) -> CurveModel {
    let mut model = CurveModel::new();
    model.replace(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect());
    model
}

// ── Zustandsautomat ──

#[test]
fn test_primary_press_on_empty_space_appends() {
    let mut model = CurveModel::new();

    let outcome = model.primary_press(DVec2::new(0.2, 0.3));
    assert_eq!(outcome, PressOutcome::Appended(0));
    assert_eq!(model.point_count(), 1);
    assert_eq!(model.drag_state(), DragState::Idle);

    let outcome = model.primary_press(DVec2::new(0.8, 0.3));
    assert_eq!(outcome, PressOutcome::Appended(1));
    assert_eq!(model.points()[1], DVec2::new(0.8, 0.3));
}

#[test]
fn test_primary_press_on_point_starts_drag_without_mutation() {
    let mut model = model_with(&[(0.1, 0.1), (0.5, 0.5), (0.9, 0.1)]);

    let outcome = model.primary_press(DVec2::new(0.505, 0.495));
    assert_eq!(outcome, PressOutcome::Selected(1));
    assert_eq!(model.drag_state(), DragState::Dragging(1));
    assert_eq!(model.selection(), Some(1));
    assert_eq!(model.point_count(), 3);
}

#[test]
fn test_primary_press_ignored_while_dragging() {
    let mut model = model_with(&[(0.1, 0.1)]);
    model.primary_press(DVec2::new(0.1, 0.1));

    let outcome = model.primary_press(DVec2::new(0.7, 0.7));
    assert_eq!(outcome, PressOutcome::Ignored);
    assert_eq!(model.point_count(), 1);
    assert_eq!(model.drag_state(), DragState::Dragging(0));
}

#[test]
fn test_motion_moves_dragged_point_in_place() {
    let mut model = model_with(&[(0.1, 0.1), (0.5, 0.5)]);
    model.primary_press(DVec2::new(0.5, 0.5));

    assert!(model.motion(DVec2::new(0.6, 0.8)));
    assert_eq!(model.points()[1], DVec2::new(0.6, 0.8));
    assert_eq!(model.point_count(), 2);

    // Folgebewegung trifft weiterhin denselben Index
    assert!(model.motion(DVec2::new(0.65, 0.85)));
    assert_eq!(model.points()[1], DVec2::new(0.65, 0.85));
}

#[test]
fn test_motion_while_idle_is_noop() {
    let mut model = model_with(&[(0.1, 0.1)]);
    assert!(!model.motion(DVec2::new(0.1, 0.1)));
    assert_eq!(model.points()[0], DVec2::new(0.1, 0.1));
}

#[test]
fn test_release_always_returns_to_idle() {
    let mut model = model_with(&[(0.1, 0.1)]);
    model.release();
    assert_eq!(model.drag_state(), DragState::Idle);

    model.primary_press(DVec2::new(0.1, 0.1));
    assert_eq!(model.drag_state(), DragState::Dragging(0));
    model.release();
    assert_eq!(model.drag_state(), DragState::Idle);
    assert!(!model.motion(DVec2::new(0.4, 0.4)));
}

#[test]
fn test_secondary_press_removes_first_hit() {
    let mut model = model_with(&[(0.5, 0.5), (0.2, 0.2), (0.51, 0.5)]);

    let removed = model.secondary_press(DVec2::new(0.509, 0.5));
    assert_eq!(removed, Some(0));
    assert_eq!(
        model.points(),
        &[DVec2::new(0.2, 0.2), DVec2::new(0.51, 0.5)]
    );
}

#[test]
fn test_secondary_press_miss_keeps_polygon() {
    let mut model = model_with(&[(0.5, 0.5)]);
    assert_eq!(model.secondary_press(DVec2::new(0.9, 0.9)), None);
    assert_eq!(model.point_count(), 1);
}

#[test]
fn test_removing_dragged_point_forces_idle() {
    let mut model = model_with(&[(0.1, 0.1), (0.5, 0.5)]);
    model.primary_press(DVec2::new(0.5, 0.5));
    assert_eq!(model.drag_state(), DragState::Dragging(1));

    assert_eq!(model.secondary_press(DVec2::new(0.5, 0.5)), Some(1));
    assert_eq!(model.drag_state(), DragState::Idle);
    assert!(!model.motion(DVec2::new(0.3, 0.3)));
}

#[test]
fn test_removing_other_point_also_ends_drag() {
    let mut model = model_with(&[(0.1, 0.1), (0.5, 0.5), (0.9, 0.9)]);
    model.primary_press(DVec2::new(0.9, 0.9));
    assert_eq!(model.drag_state(), DragState::Dragging(2));

    // Index 2 wäre nach dem Entfernen von Index 0 ungültig
    assert_eq!(model.secondary_press(DVec2::new(0.1, 0.1)), Some(0));
    assert_eq!(model.drag_state(), DragState::Idle);
    assert!(!model.motion(DVec2::new(0.3, 0.3)));
    assert_eq!(model.points()[1], DVec2::new(0.9, 0.9));
}

#[test]
fn test_set_parameter_clamps_and_rejects_nan() {
    let mut model = CurveModel::new();
    assert_relative_eq!(model.t(), DEFAULT_T);

    assert!(model.set_parameter(0.25));
    assert_relative_eq!(model.t(), 0.25);

    model.set_parameter(1.7);
    assert_relative_eq!(model.t(), 1.0);

    model.set_parameter(-3.0);
    assert_relative_eq!(model.t(), 0.0);

    model.set_parameter(f64::INFINITY);
    assert_relative_eq!(model.t(), 1.0);

    assert!(!model.set_parameter(f64::NAN));
    assert_relative_eq!(model.t(), 1.0);

    assert!(!model.set_parameter(1.0));
}

#[test]
fn test_set_parameter_keeps_polygon() {
    let mut model = model_with(&[(0.1, 0.1), (0.9, 0.9)]);
    model.set_parameter(0.1);
    assert_eq!(model.point_count(), 2);
}

#[test]
fn test_clear_and_replace_force_idle() {
    let mut model = model_with(&[(0.1, 0.1), (0.5, 0.5)]);
    model.primary_press(DVec2::new(0.1, 0.1));
    model.clear();
    assert_eq!(model.point_count(), 0);
    assert_eq!(model.drag_state(), DragState::Idle);

    model.replace(vec![DVec2::new(0.3, 0.3)]);
    model.primary_press(DVec2::new(0.3, 0.3));
    model.replace(vec![DVec2::new(0.4, 0.4), DVec2::new(0.6, 0.6)]);
    assert_eq!(model.point_count(), 2);
    assert_eq!(model.drag_state(), DragState::Idle);
}

#[test]
fn test_custom_hit_radius() {
    let mut model = CurveModel::with_hit_radius(0.1);
    model.replace(vec![DVec2::new(0.5, 0.5)]);

    let outcome = model.primary_press(DVec2::new(0.58, 0.5));
    assert_eq!(outcome, PressOutcome::Selected(0));
}

// ── Abgeleitete Ansichten ──

#[test]
fn test_derived_views_without_curve() {
    let model = model_with(&[(0.5, 0.5)]);
    assert!(model.curve_polyline(200).is_empty());
    assert!(model.point_at_t().is_none());
    assert!(model.tangent_arrow(0.07).is_none());
    assert!(model.construction_levels().is_empty());
    assert!(model.segment_labels().is_empty());

    let empty = CurveModel::new();
    assert!(empty.evaluation().is_none());
    assert!(empty.construction_levels().is_empty());
}

#[test]
fn test_derived_views_parabola() {
    let model = model_with(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);

    assert_eq!(model.curve_polyline(200).len(), 200);
    assert_eq!(model.point_at_t(), Some(DVec2::new(0.5, 0.5)));

    let levels = model.construction_levels();
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0], vec![DVec2::new(0.25, 0.5), DVec2::new(0.75, 0.5)]);

    let arrow = model.tangent_arrow(0.07).expect("Tangente erwartet");
    assert_eq!(arrow.origin, DVec2::new(0.5, 0.5));
    assert_relative_eq!(arrow.vector.x, 0.07, epsilon = 1e-12);
    assert_relative_eq!(arrow.vector.y, 0.0, epsilon = 1e-12);

    let labels = model.segment_labels();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].midpoint, DVec2::new(0.25, 0.5));
    assert_relative_eq!(labels[0].length, 1.25_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_zero_tangent_yields_no_arrow() {
    // Zwei identische Punkte: Ableitung ist der Nullvektor
    let model = model_with(&[(0.4, 0.4), (0.4, 0.4)]);
    assert!(model.point_at_t().is_some());
    assert!(model.tangent_arrow(0.07).is_none());
}
