use super::*;
use indoor_map_editor::{EditError, FeatureStore};
use std::sync::Arc;

fn state_with_room() -> (AppController, AppState, MemoryBlobStore) {
    let (controller, mut state, store) = new_state();
    state.features = Arc::new(FeatureStore::from_features(vec![room("r1", 1)]));
    (controller, state, store)
}

fn begin(controller: &mut AppController, state: &mut AppState, id: &str) {
    run(
        controller,
        state,
        AppIntent::GeometryEditRequested { id: id.into() },
    );
}

#[test]
fn vertex_removal_floor_keeps_working_copy() {
    let (mut controller, mut state, _store) = state_with_room();
    begin(&mut controller, &mut state, "r1");

    for index in 0..3 {
        let err = controller
            .handle_intent(&mut state, AppIntent::VertexRemoveRequested { index })
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<EditError>(),
            Some(&EditError::BelowMinimumPoints { minimum: 3 })
        );
        assert_eq!(state.editor.geometry_edit.coords(), triangle().as_slice());
    }
}

#[test]
fn midpoint_insert_then_save_writes_back() {
    let (mut controller, mut state, store) = state_with_room();
    begin(&mut controller, &mut state, "r1");
    assert_eq!(
        state.editor.geometry_edit.draft().map(|d| d.fill_color.as_str()),
        Some("#4CAF50")
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::EdgeMidpointInsertRequested { edge_index: 2 },
    );
    run(&mut controller, &mut state, AppIntent::VertexRemoveRequested { index: 1 });
    run(
        &mut controller,
        &mut state,
        AppIntent::WorkingPropertiesChanged {
            name: "Lobby".into(),
            description: "Halle".into(),
            fill_color: "#111111".into(),
            border_color: "#222222".into(),
        },
    );
    run(&mut controller, &mut state, AppIntent::GeometryEditSaveRequested);

    let feature = state.features.get("r1").unwrap();
    assert_eq!(
        feature.coordinates,
        vec![p(1.0, 1.0), p(2.0, 2.0), p(1.5, 1.5)]
    );
    assert_eq!(feature.properties.name, "Lobby");
    assert_eq!(feature.properties.fill_color.as_deref(), Some("#111111"));
    assert_eq!(feature.properties.border_color.as_deref(), Some("#222222"));
    assert_eq!(feature.feature_type, FeatureType::Room);
    assert_eq!(feature.level, 1);
    assert!(!state.editor.geometry_edit.is_editing());
    assert!(!state.can_undo());
    assert_eq!(reload(&store), state.features.features());
}

#[test]
fn save_always_writes_colors() {
    let (mut controller, mut state, _store) = state_with_room();
    begin(&mut controller, &mut state, "r1");

    run(&mut controller, &mut state, AppIntent::GeometryEditSaveRequested);

    let props = &state.features.get("r1").unwrap().properties;
    assert_eq!(props.fill_color.as_deref(), Some("#4CAF50"));
    assert_eq!(props.border_color.as_deref(), Some("#000000"));
}

#[test]
fn cancel_discards_working_copy() {
    let (mut controller, mut state, store) = state_with_room();
    let before = Arc::clone(&state.features);
    begin(&mut controller, &mut state, "r1");
    run(
        &mut controller,
        &mut state,
        AppIntent::VertexMoved {
            index: 2,
            position: p(9.0, 9.0),
        },
    );

    run(&mut controller, &mut state, AppIntent::GeometryEditCancelRequested);

    assert!(!state.editor.geometry_edit.is_editing());
    assert_eq!(*state.features, *before);
    assert!(!state.can_undo());
    assert!(reload(&store).is_empty());
}

#[test]
fn begin_other_feature_while_editing_is_rejected() {
    let (mut controller, mut state, _store) = new_state();
    state.features = Arc::new(FeatureStore::from_features(vec![room("a", 1), room("b", 1)]));
    begin(&mut controller, &mut state, "a");

    let err = controller
        .handle_intent(&mut state, AppIntent::GeometryEditRequested { id: "b".into() })
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<EditError>(),
        Some(EditError::InvalidState(_))
    ));
    assert_eq!(state.editor.geometry_edit.feature_id(), Some("a"));
}

#[test]
fn begin_unknown_feature_reports_not_found() {
    let (mut controller, mut state, _store) = state_with_room();

    let err = controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryEditRequested { id: "nope".into() },
        )
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<EditError>(),
        Some(&EditError::NotFound { id: "nope".into() })
    );
    assert!(!state.editor.geometry_edit.is_editing());
}

#[test]
fn vertex_ops_without_session_are_rejected() {
    let (mut controller, mut state, _store) = state_with_room();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::VertexMoved {
            index: 0,
            position: p(0.0, 0.0),
        },
    );
    assert!(result.is_err());
    assert!(controller
        .handle_intent(&mut state, AppIntent::GeometryEditSaveRequested)
        .is_err());
    assert_eq!(state.features.get("r1").unwrap().coordinates, triangle());
}

#[test]
fn save_after_target_vanished_writes_nothing() {
    let (mut controller, mut state, _store) = state_with_room();
    begin(&mut controller, &mut state, "r1");
    state.features = Arc::new(FeatureStore::new());

    run(&mut controller, &mut state, AppIntent::GeometryEditSaveRequested);

    assert!(state.features.is_empty());
    assert!(!state.editor.geometry_edit.is_editing());
}

#[test]
fn deleting_edited_feature_ends_session() {
    let (mut controller, mut state, _store) = state_with_room();
    begin(&mut controller, &mut state, "r1");

    run(
        &mut controller,
        &mut state,
        AppIntent::FeatureDeleteRequested { id: "r1".into() },
    );

    assert!(!state.editor.geometry_edit.is_editing());
}
