//! Use-Cases für Etagenwechsel und Feature-Auswahl.

use crate::app::use_cases::deep_link;
use crate::app::AppState;
use crate::core::geometry;

/// Wechselt die angezeigte Etage. Ungültige Etagen werden ignoriert.
pub fn set_level(state: &mut AppState, level: u32) {
    if !state.options.is_valid_level(level) {
        log::debug!("Etage {} ignoriert", level);
        return;
    }
    state.view.current_level = level;
    log::info!("Etage {} angezeigt", level);
}

/// Wählt ein Feature per Klick auf der Karte aus.
///
/// Zentriert auf die Bounding-Box-Mitte mit `click_zoom`.
pub fn select_on_map(state: &mut AppState, id: &str) {
    let Some(feature) = state.features.get(id) else {
        log::warn!("Auswahl: Feature '{}' nicht gefunden", id);
        return;
    };
    if let Some(center) = geometry::bounds_center(&feature.coordinates) {
        state.view.focus(center, state.options.click_zoom);
    }
    state.view.selected_feature_id = Some(feature.id.clone());
    log::debug!("Feature '{}' ausgewählt", id);
}

/// Wählt ein Feature aus der Liste aus.
///
/// Wechselt auf die Etage des Features, zentriert auf den Schwerpunkt mit
/// `select_zoom` und setzt die aktuelle Adresse auf den Deep-Link.
pub fn select_from_list(state: &mut AppState, id: &str) {
    let Some(feature) = state.features.get(id) else {
        log::warn!("Auswahl: Feature '{}' nicht gefunden", id);
        return;
    };
    if !state.options.is_valid_level(feature.level) {
        log::warn!(
            "Auswahl: Feature '{}' liegt auf ungültiger Etage {}",
            id,
            feature.level
        );
        return;
    }
    let center = geometry::centroid(&feature.coordinates);
    let level = feature.level;
    let feature_id = feature.id.clone();

    state.view.current_level = level;
    state.view.focus(center, state.options.select_zoom);
    if let Some(base) = &state.ui.base_url {
        state.ui.current_url = Some(deep_link::entity_link(base, &feature_id));
    }
    state.view.selected_feature_id = Some(feature_id);
    log::debug!("Feature '{}' aus Liste ausgewählt", id);
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.view.selected_feature_id = None;
}
