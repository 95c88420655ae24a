//! Use-Case: Feature löschen.

use crate::app::use_cases::persistence;
use crate::app::AppState;
use std::sync::Arc;

/// Entfernt das Feature `id` aus dem Repository.
///
/// Legt immer einen Undo-Snapshot ab; unbekannte ID ist ein stiller No-op.
/// Eine Auswahl bzw. offene Bearbeitung des Features wird beendet.
pub fn delete_feature(state: &mut AppState, id: &str) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    if !state.features.contains(id) {
        log::warn!("Löschen: Feature '{}' nicht gefunden", id);
        persistence::persist(state);
        return;
    }

    if let Some(removed) = Arc::make_mut(&mut state.features).remove(id) {
        log::info!("Feature '{}' ({}) gelöscht", removed.id, removed.label());
    }

    if state.view.selected_feature_id.as_deref() == Some(id) {
        state.view.selected_feature_id = None;
    }
    if state.editor.geometry_edit.feature_id() == Some(id) {
        let _ = state.editor.geometry_edit.cancel();
    }

    persistence::persist(state);
}
