use super::*;
use indoor_map_editor::FeatureStore;
use std::sync::Arc;

#[test]
fn undo_restores_exact_previous_repository() {
    let (mut controller, mut state, _store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);
    let s0: FeatureStore = (*state.features).clone();

    draw(&mut controller, &mut state, FeatureType::Shop, &triangle(), Some("Kiosk"));
    assert_eq!(state.feature_count(), 2);

    run(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_eq!(*state.features, s0);
}

#[test]
fn undo_skips_property_and_geometry_edits() {
    let (mut controller, mut state, store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);
    let id = state.features.features()[0].id.clone();

    run(
        &mut controller,
        &mut state,
        AppIntent::FeaturePropertiesEdited {
            id: id.clone(),
            name: "Lobby".into(),
            description: "Eingangshalle".into(),
        },
    );
    run(&mut controller, &mut state, AppIntent::GeometryEditRequested { id: id.clone() });
    run(
        &mut controller,
        &mut state,
        AppIntent::VertexMoved {
            index: 0,
            position: p(0.5, 0.5),
        },
    );
    run(&mut controller, &mut state, AppIntent::GeometryEditSaveRequested);
    assert_eq!(state.history.len(), 1);
    assert_eq!(reload(&store)[0].properties.name, "Lobby");

    // Undo springt über beide Bearbeitungen zurück vor das Anlegen
    run(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.features.is_empty());
    assert!(!state.can_undo());
}

#[test]
fn edit_properties_on_unknown_id_is_silent_noop() {
    let (mut controller, mut state, _store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);
    let before = Arc::clone(&state.features);

    run(
        &mut controller,
        &mut state,
        AppIntent::FeaturePropertiesEdited {
            id: "missing".into(),
            name: "x".into(),
            description: "y".into(),
        },
    );

    assert_eq!(*state.features, *before);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn delete_pushes_history_and_persists() {
    let (mut controller, mut state, store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);
    draw(&mut controller, &mut state, FeatureType::Gate, &triangle(), None);
    let gate_id = state.features.features()[1].id.clone();
    run(
        &mut controller,
        &mut state,
        AppIntent::FeatureClicked {
            id: Some(gate_id.clone()),
        },
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::FeatureDeleteRequested { id: gate_id.clone() },
    );

    assert!(!state.features.contains(&gate_id));
    assert!(state.view.selected_feature_id.is_none());
    assert_eq!(state.history.len(), 3);
    assert_eq!(reload(&store).len(), 1);

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.features.contains(&gate_id));
    assert_eq!(reload(&store).len(), 2);
}

#[test]
fn delete_unknown_id_changes_nothing_but_history() {
    let (mut controller, mut state, _store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);

    run(
        &mut controller,
        &mut state,
        AppIntent::FeatureDeleteRequested {
            id: "missing".into(),
        },
    );

    assert_eq!(state.feature_count(), 1);
    assert_eq!(state.history.len(), 2);
}

#[test]
fn undo_on_empty_history_is_noop() {
    let (mut controller, mut state, store) = new_state();

    run(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.features.is_empty());
    assert!(store.raw(indoor_map_editor::storage::DEFAULT_STORAGE_KEY).is_none());
}

#[test]
fn features_survive_restart() {
    let (mut controller, mut state, store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Restaurant, &triangle(), Some("Café"));
    draw(&mut controller, &mut state, FeatureType::Point, &[p(5.0, 5.0)], Some("Info"));

    let restarted =
        AppState::with_storage(FeatureStorage::new(store.clone()), EditorOptions::default());

    assert_eq!(*restarted.features, *state.features);
    assert!(!restarted.can_undo());
}

#[test]
fn disabled_editing_ignores_mutations() {
    let (mut controller, mut state, store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);
    let id = state.features.features()[0].id.clone();
    state.options.editing_enabled = false;

    run(&mut controller, &mut state, AppIntent::FeatureDeleteRequested { id: id.clone() });
    run(&mut controller, &mut state, AppIntent::UndoRequested);
    run(&mut controller, &mut state, AppIntent::ClearStorageRequested);
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawingStartRequested {
            feature_type: FeatureType::Room,
        },
    );

    assert!(state.features.contains(&id));
    assert!(!state.editor.drawing.is_drawing());
    assert_eq!(reload(&store).len(), 1);
}

#[test]
fn clear_storage_removes_persisted_snapshot() {
    let (mut controller, mut state, store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);

    run(&mut controller, &mut state, AppIntent::ClearStorageRequested);

    assert!(reload(&store).is_empty());
    assert_eq!(state.feature_count(), 1);
}

#[test]
fn point_count_invariants_hold_after_mixed_session() {
    let (mut controller, mut state, _store) = new_state();
    draw(&mut controller, &mut state, FeatureType::Point, &[p(1.0, 1.0), p(2.0, 2.0)], None);
    draw(&mut controller, &mut state, FeatureType::Building, &triangle(), None);
    draw(&mut controller, &mut state, FeatureType::Security, &triangle(), None);
    let id = state.features.features()[0].id.clone();
    run(&mut controller, &mut state, AppIntent::GeometryEditRequested { id });
    let _ = controller.handle_intent(&mut state, AppIntent::VertexRemoveRequested { index: 0 });
    let _ = controller.handle_intent(
        &mut state,
        AppIntent::VertexInsertRequested {
            after_index: 0,
            position: p(3.0, 3.0),
        },
    );
    run(&mut controller, &mut state, AppIntent::GeometryEditSaveRequested);
    run(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_point_counts(&state);
}
