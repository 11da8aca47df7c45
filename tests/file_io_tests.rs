use bezier_editor::{AppCommand, AppController, AppIntent, AppState, CanvasImage, Point2D};
use std::path::PathBuf;

/// Eindeutiger Pfad im Temp-Verzeichnis pro Test.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bezier_editor_{}_{}", std::process::id(), name))
}

fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

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
fn test_save_requested_without_path_opens_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_save_file_dialog);
    match state.command_log.entries().last() {
        Some(AppCommand::SaveFile { path: None }) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_save_and_load_roundtrip_via_files() {
    let mut controller = AppController::new();
    let mut state = parabola_state();
    let path = temp_path("roundtrip.json");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: path_string(&path),
            },
        )
        .expect("Speichern sollte gelingen");
    assert_eq!(state.ui.current_file_path, Some(path_string(&path)));

    let content = std::fs::read_to_string(&path).expect("Datei sollte existieren");
    assert_eq!(content, "[[0.0,0.0],[0.5,1.0],[1.0,0.0]]");

    let mut loaded = AppState::new();
    controller
        .handle_intent(
            &mut loaded,
            AppIntent::FileSelected {
                path: path_string(&path),
            },
        )
        .expect("Laden sollte gelingen");

    assert_eq!(loaded.model.points(), state.model.points());
    assert!(loaded.ui.status_message.is_some());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_requested_with_known_path_writes_directly() {
    let mut controller = AppController::new();
    let mut state = parabola_state();
    let path = temp_path("known_path.json");
    state.ui.current_file_path = Some(path_string(&path));

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern sollte gelingen");

    assert!(!state.ui.show_save_file_dialog);
    assert!(path.exists());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_malformed_file_leaves_model_unchanged() {
    let mut controller = AppController::new();
    let mut state = parabola_state();
    let before = state.model.points().to_vec();
    let path = temp_path("malformed.json");
    std::fs::write(&path, "[[1, \"a\"]]").expect("Testdatei schreiben");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: path_string(&path),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.model.points(), before.as_slice());
    assert!(state.ui.current_file_path.is_none());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_reports_error() {
    let mut controller = AppController::new();
    let mut state = parabola_state();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: path_string(&temp_path("does_not_exist.json")),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.point_count(), 3);
}

#[test]
fn test_save_with_non_finite_point_writes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state
        .model
        .replace(vec![Point2D::new(0.1, 0.1), Point2D::new(f64::INFINITY, 0.2)]);
    let path = temp_path("non_finite.json");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::SaveFilePathSelected {
            path: path_string(&path),
        },
    );

    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_png_export_flow_writes_file() {
    let mut controller = AppController::new();
    let mut state = parabola_state();
    let path = temp_path("export.png");

    controller
        .handle_intent(&mut state, AppIntent::ExportPngRequested)
        .expect("ExportPngRequested sollte ohne Fehler durchlaufen");
    assert!(state.ui.show_export_dialog);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path_string(&path),
            },
        )
        .expect("ExportPathSelected sollte ohne Fehler durchlaufen");
    assert_eq!(state.ui.pending_export_path, Some(path_string(&path)));

    let image = CanvasImage::new(2, 2, vec![255; 16]).expect("gültiges Bild");
    controller
        .handle_intent(&mut state, AppIntent::CanvasCaptured { image })
        .expect("Export sollte gelingen");

    assert!(state.ui.pending_export_path.is_none());
    let bytes = std::fs::read(&path).expect("PNG sollte existieren");
    assert_eq!(&bytes[1..4], b"PNG");

    let _ = std::fs::remove_file(&path);
}
