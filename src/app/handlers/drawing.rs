//! Handler für die Zeichen-Sitzung.

use crate::app::use_cases;
use crate::app::{AppState, EditError};
use crate::core::{FeatureType, LatLng};

/// Startet das Zeichnen eines neuen Features.
pub fn start(state: &mut AppState, feature_type: FeatureType) -> Result<(), EditError> {
    if state.editor.geometry_edit.is_editing() {
        return Err(EditError::InvalidState(
            "Während der Bearbeitung kann nicht gezeichnet werden",
        ));
    }
    state.editor.drawing.start(feature_type)?;
    state.view.selected_feature_id = None;
    let status = state.editor.drawing.status_text();
    state.ui.set_status(status);
    Ok(())
}

/// Hängt einen Punkt an. Ohne aktive Zeichnung wird der Klick ignoriert.
pub fn add_point(state: &mut AppState, position: LatLng) {
    if !state.editor.drawing.is_drawing() {
        log::debug!("Punkt ignoriert: kein Zeichenmodus aktiv");
        return;
    }
    if state.editor.drawing.add_point(position).is_ok() {
        let status = state.editor.drawing.status_text();
        state.ui.set_status(status);
    }
}

/// Entfernt den zuletzt gesetzten Punkt.
pub fn remove_last_point(state: &mut AppState) -> Result<(), EditError> {
    state.editor.drawing.remove_last_point()?;
    let status = state.editor.drawing.status_text();
    state.ui.set_status(status);
    Ok(())
}

/// Setzt den Namen des neuen Features.
pub fn set_label(state: &mut AppState, text: String) -> Result<(), EditError> {
    state.editor.drawing.set_label(text)
}

/// Verwirft die laufende Zeichnung.
pub fn cancel(state: &mut AppState) -> Result<(), EditError> {
    state.editor.drawing.cancel()?;
    let status = state.editor.drawing.status_text();
    state.ui.set_status(status);
    Ok(())
}

/// Schließt die Zeichnung auf der aktuellen Etage ab und übernimmt das Feature.
pub fn complete(state: &mut AppState) -> Result<(), EditError> {
    let level = state.view.current_level;
    let count = state.feature_count();
    let feature = state.editor.drawing.complete(level, count)?;
    let name = feature.properties.name.clone();
    use_cases::editing::commit_new_feature(state, feature);
    state.ui.set_status(format!("'{}' angelegt", name));
    Ok(())
}
