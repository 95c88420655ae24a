//! Use-Case: Name und Beschreibung eines Features ändern.

use crate::app::use_cases::persistence;
use crate::app::AppState;
use std::sync::Arc;

/// Ersetzt Name und Beschreibung des Features `id`.
///
/// Kein Undo-Snapshot. Unbekannte ID: stiller No-op (geloggt).
pub fn edit_properties(state: &mut AppState, id: &str, name: &str, description: &str) {
    if !state.features.contains(id) {
        log::warn!("Eigenschaften: Feature '{}' nicht gefunden", id);
        return;
    }

    if let Some(feature) = Arc::make_mut(&mut state.features).get_mut(id) {
        feature.properties.name = name.to_string();
        feature.properties.description = description.to_string();
        log::info!("Eigenschaften von '{}' geändert", id);
    }

    persistence::persist(state);
}
