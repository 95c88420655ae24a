//! Use-Case: Fertig gezeichnetes Feature ins Repository übernehmen.

use crate::app::use_cases::persistence;
use crate::app::AppState;
use crate::core::{Feature, FeatureType};
use std::sync::Arc;

/// Übernimmt ein neues Feature ins Repository.
///
/// Gebäudeumrisse werden nicht selbst eingefügt, sondern als je eine Kopie pro
/// Etage `1..=max_level` (siehe [`building_copies`]).
pub fn commit_new_feature(state: &mut AppState, feature: Feature) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let to_insert = if feature.feature_type == FeatureType::Building {
        building_copies(&feature, state.options.max_level)
    } else {
        vec![feature]
    };

    let features = Arc::make_mut(&mut state.features);
    for feature in to_insert {
        let id = feature.id.clone();
        if features.insert(feature) {
            log::info!("Feature '{}' angelegt", id);
        } else {
            log::warn!("Feature-ID '{}' existiert bereits, übersprungen", id);
        }
    }

    persistence::persist(state);
}

/// Erzeugt die Etagen-Kopien eines Gebäudeumrisses.
///
/// ID `"{id}-{level}"`, Name mit Zusatz `" (Level {level})"`, Beschreibung
/// `"Building outline on level {level}"`; Koordinaten unverändert.
pub fn building_copies(feature: &Feature, max_level: u32) -> Vec<Feature> {
    (1..=max_level)
        .map(|level| {
            let mut copy = feature.clone();
            copy.id = format!("{}-{}", feature.id, level);
            copy.level = level;
            copy.properties.name = format!("{} (Level {})", feature.properties.name, level);
            copy.properties.description = format!("Building outline on level {}", level);
            copy
        })
        .collect()
}
