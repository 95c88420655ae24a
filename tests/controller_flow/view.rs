use super::*;
use approx::assert_relative_eq;
use indoor_map_editor::FeatureStore;
use std::sync::Arc;

fn state_with_features() -> (AppController, AppState, MemoryBlobStore) {
    let (controller, mut state, store) = new_state();
    let gate = Feature::new(
        "gate-a",
        FeatureType::Point,
        2,
        vec![p(5.0, 6.0)],
        FeatureProperties::new("Gate A", ""),
    );
    state.features = Arc::new(FeatureStore::from_features(vec![room("r1", 1), gate]));
    (controller, state, store)
}

#[test]
fn level_change_respects_range() {
    let (mut controller, mut state, _store) = state_with_features();

    run(&mut controller, &mut state, AppIntent::LevelChangeRequested { level: 2 });
    assert_eq!(state.view.current_level, 2);
    assert_eq!(state.visible_features().count(), 1);

    run(&mut controller, &mut state, AppIntent::LevelChangeRequested { level: 3 });
    run(&mut controller, &mut state, AppIntent::LevelChangeRequested { level: 0 });
    assert_eq!(state.view.current_level, 2);
}

#[test]
fn feature_click_selects_and_empty_click_deselects() {
    let (mut controller, mut state, _store) = state_with_features();

    run(
        &mut controller,
        &mut state,
        AppIntent::FeatureClicked {
            id: Some("r1".into()),
        },
    );
    assert_eq!(state.selected_feature().map(|f| f.id.as_str()), Some("r1"));
    assert_relative_eq!(state.view.center.x, 1.5);
    assert_relative_eq!(state.view.center.y, 1.5);
    assert_relative_eq!(state.view.zoom, state.options.click_zoom);

    run(&mut controller, &mut state, AppIntent::FeatureClicked { id: None });
    assert!(state.selected_feature().is_none());
}

#[test]
fn list_selection_updates_address() {
    let (mut controller, mut state, _store) = state_with_features();
    run(
        &mut controller,
        &mut state,
        AppIntent::DeepLinkOpened {
            url: "https://maps.example/airport".into(),
        },
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::FeatureListSelected {
            id: "gate-a".into(),
        },
    );

    assert_eq!(state.view.current_level, 2);
    assert_eq!(state.view.center, p(5.0, 6.0));
    assert_relative_eq!(state.view.zoom, state.options.select_zoom);
    assert_eq!(
        state.ui.current_url.as_ref().map(|u| u.as_str()),
        Some("https://maps.example/airport?entity=gate-a")
    );
}

#[test]
fn initial_deep_link_focuses_feature() {
    let (mut controller, mut state, _store) = state_with_features();

    run(
        &mut controller,
        &mut state,
        AppIntent::DeepLinkOpened {
            url: "https://maps.example/airport?entity=gate-a".into(),
        },
    );

    assert_eq!(state.view.current_level, 2);
    assert_eq!(state.view.center, p(5.0, 6.0));
    assert_eq!(state.view.selected_feature_id.as_deref(), Some("gate-a"));
}

#[test]
fn unknown_deep_link_keeps_initial_view() {
    let (mut controller, mut state, _store) = state_with_features();
    let before = state.view.clone();

    run(
        &mut controller,
        &mut state,
        AppIntent::DeepLinkOpened {
            url: "https://maps.example/airport?entity=missing".into(),
        },
    );

    assert_eq!(state.view, before);
}

#[test]
fn copy_link_produces_entity_url() {
    let (mut controller, mut state, _store) = state_with_features();
    run(
        &mut controller,
        &mut state,
        AppIntent::DeepLinkOpened {
            url: "https://maps.example/airport?entity=r1".into(),
        },
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::CopyLinkRequested {
            id: "gate-a".into(),
        },
    );

    assert_eq!(
        state.ui.copied_link.as_deref(),
        Some("https://maps.example/airport?entity=gate-a")
    );
}

#[test]
fn search_filters_current_level_by_name_or_type() {
    let (_controller, state, _store) = state_with_features();

    let by_name = state.features.search(2, "gate");
    assert_eq!(by_name.len(), 1);
    let by_type = state.features.search(2, "POINT");
    assert_eq!(by_type.len(), 1);
    assert!(state.features.search(1, "gate").is_empty());
}

#[test]
fn view_intents_work_with_editing_disabled() {
    let (mut controller, mut state, _store) = state_with_features();
    state.options.editing_enabled = false;

    run(&mut controller, &mut state, AppIntent::LevelChangeRequested { level: 2 });
    run(
        &mut controller,
        &mut state,
        AppIntent::FeatureClicked {
            id: Some("gate-a".into()),
        },
    );

    assert_eq!(state.view.current_level, 2);
    assert_eq!(state.view.selected_feature_id.as_deref(), Some("gate-a"));
}
