//! Use-Cases für Deep-Links (`?entity=<id>`).

use crate::app::AppState;
use crate::core::geometry;
use url::Url;

/// Name des Query-Parameters, der auf ein Feature verweist.
pub const ENTITY_PARAM: &str = "entity";

/// Baut den Link auf `id`: `base` mit gesetztem bzw. ersetztem `entity`-Parameter.
///
/// Andere Query-Parameter bleiben erhalten, ein Fragment wird entfernt.
pub fn entity_link(base: &Url, id: &str) -> Url {
    let mut link = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != ENTITY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    link.set_fragment(None);
    link.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(ENTITY_PARAM, id);
    link
}

/// Liest den `entity`-Parameter aus `url`.
pub fn entity_id_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == ENTITY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// Übernimmt `url` als Basis-Adresse und springt ggf. das verlinkte Feature an.
///
/// Auflösbarer `entity`: Etage des Features, Schwerpunkt, `select_zoom`.
/// Sonst bleibt die Ansicht unverändert.
pub fn apply_deep_link(state: &mut AppState, url: Url) {
    let entity = entity_id_from_url(&url);

    let mut base = url.clone();
    base.set_query(None);
    base.set_fragment(None);
    state.ui.base_url = Some(base);
    state.ui.current_url = Some(url);

    let Some(id) = entity else {
        return;
    };
    let Some(feature) = state.features.get(&id) else {
        log::warn!("Deep-Link: Feature '{}' nicht gefunden", id);
        return;
    };
    if !state.options.is_valid_level(feature.level) {
        log::warn!(
            "Deep-Link: Feature '{}' liegt auf ungültiger Etage {}",
            id,
            feature.level
        );
        return;
    }

    let center = geometry::centroid(&feature.coordinates);
    state.view.current_level = feature.level;
    state.view.focus(center, state.options.select_zoom);
    state.view.selected_feature_id = Some(id);
    log::info!(
        "Deep-Link auf '{}' (Etage {})",
        feature.id,
        state.view.current_level
    );
}

/// Erzeugt den Link auf `id` und merkt ihn in `UiState::copied_link`.
pub fn copy_link(state: &mut AppState, id: &str) {
    let Some(base) = &state.ui.base_url else {
        log::warn!("Link kopieren: keine Basis-Adresse bekannt");
        return;
    };
    let link = entity_link(base, id).to_string();
    log::info!("Link kopiert: {}", link);
    state.ui.set_status("Link kopiert");
    state.ui.copied_link = Some(link);
}
