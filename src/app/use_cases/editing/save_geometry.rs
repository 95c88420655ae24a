//! Use-Case: Ergebnis der Geometrie-Bearbeitung zurückschreiben.

use crate::app::tools::EditDraft;
use crate::app::use_cases::persistence;
use crate::app::AppState;
use std::sync::Arc;

/// Schreibt Koordinaten, Name, Beschreibung und Farben der Arbeitskopie auf das
/// Ziel-Feature. ID, Typ und Etage bleiben unverändert.
///
/// Kein Undo-Snapshot. Existiert das Ziel nicht mehr, wird nichts geschrieben.
pub fn save_geometry_edit(state: &mut AppState, draft: EditDraft) {
    if !state.features.contains(&draft.feature_id) {
        log::warn!(
            "Bearbeitung beendet: Feature '{}' existiert nicht mehr",
            draft.feature_id
        );
        return;
    }

    if let Some(feature) = Arc::make_mut(&mut state.features).get_mut(&draft.feature_id) {
        feature.coordinates = draft.coords;
        let props = &mut feature.properties;
        props.name = draft.name;
        props.description = draft.description;
        props.fill_color = Some(draft.fill_color);
        props.border_color = Some(draft.border_color);
        log::info!(
            "Bearbeitung von '{}' gespeichert ({} Punkte)",
            feature.id,
            feature.coordinates.len()
        );
    }

    persistence::persist(state);
}
