//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::PressPrimary { pos } => handlers::editing::press_primary(state, pos),
            AppCommand::RemovePointAt { pos } => handlers::editing::remove_point_at(state, pos),
            AppCommand::MoveDraggedPoint { pos } => handlers::editing::move_dragged(state, pos),
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::SetParameter { value } => handlers::editing::set_parameter(state, value),
            AppCommand::ClearCurve => handlers::editing::clear_curve(state),

            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::QueueExport { path } => handlers::file_io::queue_export(state, path),
            AppCommand::WriteExport { image } => handlers::file_io::write_export(state, &image)?,

            // === Ansicht ===
            AppCommand::SetViewVisibility { view, visible } => {
                handlers::view::set_visibility(state, view, visible)
            }

            // === Anwendung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
