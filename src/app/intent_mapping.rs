//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::DragState;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PrimaryPressed { pos } => vec![AppCommand::PressPrimary { pos }],
        AppIntent::SecondaryPressed { pos } => vec![AppCommand::RemovePointAt { pos }],
        AppIntent::PointerMoved { pos } => {
            // Bewegungen ohne Drag erzeugen keine Commands (hält das Log frei)
            match state.model.drag_state() {
                DragState::Dragging(_) => vec![AppCommand::MoveDraggedPoint { pos }],
                DragState::Idle => Vec::new(),
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::ParameterChanged { value } => vec![AppCommand::SetParameter { value }],
        AppIntent::NewCurveRequested => vec![AppCommand::ClearCurve],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
        AppIntent::ExportPngRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::QueueExport { path }],
        AppIntent::CanvasCaptured { image } => {
            if state.ui.pending_export_path.is_some() {
                vec![AppCommand::WriteExport { image }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ToggleView { view, visible } => {
            vec![AppCommand::SetViewVisibility { view, visible }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
