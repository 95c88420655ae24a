//! Gemeinsame Hilfen für die Controller-Flow-Tests.

mod drawing;
mod editing;
mod geometry_edit;
mod view;

use indoor_map_editor::{
    AppController, AppIntent, AppState, EditorOptions, Feature, FeatureProperties, FeatureStorage,
    FeatureType, LatLng, MemoryBlobStore,
};

/// Frischer State auf geteiltem Memory-Speicher (für Persistenz-Prüfungen).
pub fn new_state() -> (AppController, AppState, MemoryBlobStore) {
    let store = MemoryBlobStore::new();
    let state = AppState::with_storage(FeatureStorage::new(store.clone()), EditorOptions::default());
    (AppController::new(), state, store)
}

/// Lädt den gespeicherten Stand aus `store` neu.
pub fn reload(store: &MemoryBlobStore) -> Vec<Feature> {
    FeatureStorage::new(store.clone()).load()
}

pub fn p(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

/// Führt einen Intent aus und erwartet Erfolg.
pub fn run(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent.clone())
        .unwrap_or_else(|e| panic!("{intent:?} sollte ohne Fehler durchlaufen: {e}"));
}

/// Zeichnet ein Feature vollständig über Intents.
pub fn draw(
    controller: &mut AppController,
    state: &mut AppState,
    feature_type: FeatureType,
    points: &[LatLng],
    label: Option<&str>,
) {
    run(controller, state, AppIntent::DrawingStartRequested { feature_type });
    for &position in points {
        run(controller, state, AppIntent::MapClicked { position });
    }
    if let Some(text) = label {
        run(
            controller,
            state,
            AppIntent::DrawingLabelChanged {
                text: text.to_string(),
            },
        );
    }
    run(controller, state, AppIntent::DrawingCompleteRequested);
}

pub fn triangle() -> Vec<LatLng> {
    vec![p(1.0, 1.0), p(1.0, 2.0), p(2.0, 2.0)]
}

pub fn room(id: &str, level: u32) -> Feature {
    Feature::new(
        id,
        FeatureType::Room,
        level,
        triangle(),
        FeatureProperties::new(format!("Room {id}"), format!("A room on level {level}")),
    )
}

/// Prüft die Punktanzahl-Invarianten aller Features.
pub fn assert_point_counts(state: &AppState) {
    for feature in state.features.iter() {
        if feature.feature_type == FeatureType::Point {
            assert_eq!(feature.coordinates.len(), 1, "{}", feature.id);
        } else {
            assert!(feature.coordinates.len() >= 3, "{}", feature.id);
        }
    }
}
