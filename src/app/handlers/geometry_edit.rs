//! Handler für die Geometrie-Bearbeitung bestehender Features.

use crate::app::use_cases;
use crate::app::{AppState, EditError};
use crate::core::LatLng;

/// Beginnt die Bearbeitung des Features `id`.
pub fn begin(state: &mut AppState, id: &str) -> Result<(), EditError> {
    if state.editor.drawing.is_drawing() {
        return Err(EditError::InvalidState(
            "Während des Zeichnens kann nicht bearbeitet werden",
        ));
    }
    let feature = state
        .features
        .get(id)
        .ok_or_else(|| EditError::NotFound { id: id.to_string() })?;
    state.editor.geometry_edit.begin(
        feature,
        &state.options.edit_fill_color_default,
        &state.options.edit_border_color_default,
    )?;
    state.view.selected_feature_id = Some(id.to_string());
    Ok(())
}

/// Fügt einen Punkt hinter `after_index` ein.
pub fn insert_vertex(
    state: &mut AppState,
    after_index: usize,
    position: LatLng,
) -> Result<(), EditError> {
    state
        .editor
        .geometry_edit
        .insert_vertex(after_index, position)
}

/// Verschiebt den Punkt an `index`.
pub fn move_vertex(state: &mut AppState, index: usize, position: LatLng) -> Result<(), EditError> {
    state.editor.geometry_edit.move_vertex(index, position)
}

/// Entfernt den Punkt an `index`.
pub fn remove_vertex(state: &mut AppState, index: usize) -> Result<(), EditError> {
    state.editor.geometry_edit.remove_vertex(index).map(|_| ())
}

/// Setzt die Arbeits-Eigenschaften.
pub fn set_working_properties(
    state: &mut AppState,
    name: String,
    description: String,
    fill_color: String,
    border_color: String,
) -> Result<(), EditError> {
    state
        .editor
        .geometry_edit
        .set_working_properties(name, description, fill_color, border_color)
}

/// Verwirft die Bearbeitung.
pub fn cancel(state: &mut AppState) -> Result<(), EditError> {
    state.editor.geometry_edit.cancel()
}

/// Beendet die Bearbeitung und schreibt die Arbeitskopie zurück.
pub fn save(state: &mut AppState) -> Result<(), EditError> {
    let draft = state.editor.geometry_edit.finish()?;
    use_cases::editing::save_geometry_edit(state, draft);
    Ok(())
}
