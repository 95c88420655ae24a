//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Abgelehnte Operationen (`EditError`) werden als Fehler zurückgegeben;
    /// der Zustand bleibt dabei unverändert.
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
            // === Zeichnen ===
            AppCommand::StartDrawing { feature_type } => {
                handlers::drawing::start(state, feature_type)?
            }
            AppCommand::AddDrawingPoint { position } => {
                handlers::drawing::add_point(state, position)
            }
            AppCommand::RemoveLastDrawingPoint => handlers::drawing::remove_last_point(state)?,
            AppCommand::SetDrawingLabel { text } => handlers::drawing::set_label(state, text)?,
            AppCommand::CancelDrawing => handlers::drawing::cancel(state)?,
            AppCommand::CompleteDrawing => handlers::drawing::complete(state)?,

            // === Bearbeiten ===
            AppCommand::EditFeatureProperties {
                id,
                name,
                description,
            } => handlers::editing::edit_properties(state, &id, &name, &description),
            AppCommand::DeleteFeature { id } => handlers::editing::delete(state, &id),

            // === Geometrie-Bearbeitung ===
            AppCommand::BeginGeometryEdit { id } => handlers::geometry_edit::begin(state, &id)?,
            AppCommand::InsertVertex {
                after_index,
                position,
            } => handlers::geometry_edit::insert_vertex(state, after_index, position)?,
            AppCommand::MoveVertex { index, position } => {
                handlers::geometry_edit::move_vertex(state, index, position)?
            }
            AppCommand::RemoveVertex { index } => {
                handlers::geometry_edit::remove_vertex(state, index)?
            }
            AppCommand::SetWorkingProperties {
                name,
                description,
                fill_color,
                border_color,
            } => handlers::geometry_edit::set_working_properties(
                state,
                name,
                description,
                fill_color,
                border_color,
            )?,
            AppCommand::CancelGeometryEdit => handlers::geometry_edit::cancel(state)?,
            AppCommand::SaveGeometryEdit => handlers::geometry_edit::save(state)?,

            // === Ansicht & Navigation ===
            AppCommand::SetLevel { level } => handlers::view::set_level(state, level),
            AppCommand::SelectFeatureOnMap { id } => handlers::view::select_on_map(state, &id),
            AppCommand::ClearSelection => handlers::view::clear_selection(state),
            AppCommand::SelectFeatureFromList { id } => {
                handlers::view::select_from_list(state, &id)
            }
            AppCommand::CopyFeatureLink { id } => handlers::view::copy_link(state, &id),
            AppCommand::ApplyDeepLink { url } => handlers::view::apply_deep_link(state, url),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),

            // === Speicher ===
            AppCommand::ClearStorage => handlers::storage::clear(state),
        }

        Ok(())
    }
}
