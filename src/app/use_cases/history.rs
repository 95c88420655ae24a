//! Use-Case: Letzte strukturelle Änderung rückgängig machen.

use crate::app::use_cases::persistence;
use crate::app::AppState;

/// Stellt den jüngsten Snapshot wieder her. Leerer Stapel: stiller No-op.
///
/// Danach verweisende Zustände werden bereinigt: eine Auswahl auf ein nicht mehr
/// vorhandenes Feature wird aufgehoben, eine Bearbeitung eines verschwundenen
/// Features verworfen.
pub fn undo(state: &mut AppState) {
    let Some(prev) = state.history.pop_undo() else {
        log::debug!("Undo: nichts zu tun");
        return;
    };
    prev.apply_to(state);
    log::info!("Undo ausgeführt ({} Features)", state.feature_count());

    if state
        .view
        .selected_feature_id
        .as_deref()
        .is_some_and(|id| !state.features.contains(id))
    {
        state.view.selected_feature_id = None;
    }
    if state
        .editor
        .geometry_edit
        .feature_id()
        .is_some_and(|id| !state.features.contains(id))
    {
        let _ = state.editor.geometry_edit.cancel();
    }

    persistence::persist(state);
}
