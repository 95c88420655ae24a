//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::geometry;
use url::Url;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Bei `editing_enabled == false` ergeben alle mutierenden Intents eine leere Sequenz.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    if !state.options.editing_enabled && intent.is_mutating() {
        log::debug!("Bearbeitung deaktiviert, Intent verworfen: {:?}", intent);
        return vec![];
    }

    match intent {
        AppIntent::DrawingStartRequested { feature_type } => {
            vec![AppCommand::StartDrawing { feature_type }]
        }
        AppIntent::DrawingPointAdded { position } => {
            vec![AppCommand::AddDrawingPoint { position }]
        }
        AppIntent::MapClicked { position } => {
            if state.editor.drawing.is_drawing() && state.options.editing_enabled {
                vec![AppCommand::AddDrawingPoint { position }]
            } else if state.view.selected_feature_id.is_some() {
                vec![AppCommand::ClearSelection]
            } else {
                vec![]
            }
        }
        AppIntent::DrawingLastPointRemoved => vec![AppCommand::RemoveLastDrawingPoint],
        AppIntent::DrawingLabelChanged { text } => vec![AppCommand::SetDrawingLabel { text }],
        AppIntent::DrawingCancelRequested => vec![AppCommand::CancelDrawing],
        AppIntent::DrawingCompleteRequested => vec![AppCommand::CompleteDrawing],

        AppIntent::FeaturePropertiesEdited {
            id,
            name,
            description,
        } => vec![AppCommand::EditFeatureProperties {
            id,
            name,
            description,
        }],
        AppIntent::FeatureDeleteRequested { id } => vec![AppCommand::DeleteFeature { id }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],

        AppIntent::GeometryEditRequested { id } => vec![AppCommand::BeginGeometryEdit { id }],
        AppIntent::VertexInsertRequested {
            after_index,
            position,
        } => vec![AppCommand::InsertVertex {
            after_index,
            position,
        }],
        AppIntent::EdgeMidpointInsertRequested { edge_index } => {
            let midpoints = geometry::edge_midpoints(state.editor.geometry_edit.coords());
            match midpoints.get(edge_index) {
                Some(&position) => vec![AppCommand::InsertVertex {
                    after_index: edge_index,
                    position,
                }],
                None => {
                    log::debug!("Kante {} existiert nicht", edge_index);
                    vec![]
                }
            }
        }
        AppIntent::VertexMoved { index, position } => {
            vec![AppCommand::MoveVertex { index, position }]
        }
        AppIntent::VertexRemoveRequested { index } => vec![AppCommand::RemoveVertex { index }],
        AppIntent::WorkingPropertiesChanged {
            name,
            description,
            fill_color,
            border_color,
        } => vec![AppCommand::SetWorkingProperties {
            name,
            description,
            fill_color,
            border_color,
        }],
        AppIntent::GeometryEditCancelRequested => vec![AppCommand::CancelGeometryEdit],
        AppIntent::GeometryEditSaveRequested => vec![AppCommand::SaveGeometryEdit],

        AppIntent::LevelChangeRequested { level } => {
            if state.options.is_valid_level(level) {
                vec![AppCommand::SetLevel { level }]
            } else {
                log::debug!(
                    "Etage {} außerhalb 1..={} ignoriert",
                    level,
                    state.options.max_level
                );
                vec![]
            }
        }
        AppIntent::FeatureClicked { id: Some(id) } => vec![AppCommand::SelectFeatureOnMap { id }],
        AppIntent::FeatureClicked { id: None } => vec![AppCommand::ClearSelection],
        AppIntent::FeatureListSelected { id } => vec![AppCommand::SelectFeatureFromList { id }],
        AppIntent::CopyLinkRequested { id } => vec![AppCommand::CopyFeatureLink { id }],
        AppIntent::DeepLinkOpened { url } => match Url::parse(&url) {
            Ok(url) => vec![AppCommand::ApplyDeepLink { url }],
            Err(e) => {
                log::warn!("Ungültige Adresse '{}': {}", url, e);
                vec![]
            }
        },

        AppIntent::ClearStorageRequested => vec![AppCommand::ClearStorage],
    }
}
