use super::*;
use indoor_map_editor::{AppCommand, EditError};

#[test]
fn room_scenario_uses_default_name() {
    let (mut controller, mut state, store) = new_state();

    draw(
        &mut controller,
        &mut state,
        FeatureType::Room,
        &triangle(),
        None,
    );

    assert_eq!(state.feature_count(), 1);
    let feature = &state.features.features()[0];
    assert_eq!(feature.feature_type, FeatureType::Room);
    assert_eq!(feature.coordinates, triangle());
    assert_eq!(feature.properties.name, "Room 1");
    assert_eq!(feature.properties.description, "A room on level 1");
    assert_eq!(feature.level, 1);
    assert!(!state.editor.drawing.is_drawing());
    assert!(state.can_undo());

    assert_eq!(reload(&store), state.features.features());
}

#[test]
fn default_name_counts_existing_features() {
    let (mut controller, mut state, _store) = new_state();

    draw(&mut controller, &mut state, FeatureType::Shop, &triangle(), None);
    draw(&mut controller, &mut state, FeatureType::Room, &triangle(), None);

    assert_eq!(state.features.features()[1].properties.name, "Room 2");
}

#[test]
fn point_scenario_uses_label() {
    let (mut controller, mut state, _store) = new_state();

    draw(
        &mut controller,
        &mut state,
        FeatureType::Point,
        &[p(5.0, 5.0)],
        Some("Gate A"),
    );

    let feature = &state.features.features()[0];
    assert_eq!(feature.coordinates, vec![p(5.0, 5.0)]);
    assert_eq!(feature.properties.name, "Gate A");
    assert_point_counts(&state);
}

#[test]
fn complete_with_too_few_points_is_rejected() {
    let (mut controller, mut state, _store) = new_state();
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawingStartRequested {
            feature_type: FeatureType::Corridor,
        },
    );
    run(&mut controller, &mut state, AppIntent::MapClicked { position: p(0.0, 0.0) });
    run(&mut controller, &mut state, AppIntent::MapClicked { position: p(0.0, 1.0) });
    assert!(!state.editor.drawing.can_complete());

    let err = controller
        .handle_intent(&mut state, AppIntent::DrawingCompleteRequested)
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<EditError>(),
        Some(&EditError::InsufficientPoints {
            required: 3,
            actual: 2
        })
    );
    assert!(state.features.is_empty());
    assert!(!state.can_undo());
    assert_eq!(state.editor.drawing.point_count(), 2);
}

#[test]
fn start_while_drawing_is_rejected() {
    let (mut controller, mut state, _store) = new_state();
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawingStartRequested {
            feature_type: FeatureType::Room,
        },
    );

    let result = controller.handle_intent(
        &mut state,
        AppIntent::DrawingStartRequested {
            feature_type: FeatureType::Gate,
        },
    );

    assert!(matches!(
        result.unwrap_err().downcast_ref::<EditError>(),
        Some(EditError::InvalidState(_))
    ));
    assert_eq!(state.editor.drawing.mode(), Some(FeatureType::Room));
}

#[test]
fn add_point_while_idle_is_ignored() {
    let (mut controller, mut state, _store) = new_state();

    run(
        &mut controller,
        &mut state,
        AppIntent::DrawingPointAdded {
            position: p(1.0, 1.0),
        },
    );

    assert!(!state.editor.drawing.is_drawing());
    assert_eq!(
        state.command_log.last(),
        Some(&AppCommand::AddDrawingPoint {
            position: p(1.0, 1.0)
        })
    );
}

#[test]
fn remove_last_point_and_cancel_leave_repository_untouched() {
    let (mut controller, mut state, store) = new_state();
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawingStartRequested {
            feature_type: FeatureType::Lounge,
        },
    );
    for position in triangle() {
        run(&mut controller, &mut state, AppIntent::MapClicked { position });
    }
    run(&mut controller, &mut state, AppIntent::DrawingLastPointRemoved);
    assert_eq!(state.editor.drawing.points(), &triangle()[..2]);

    run(&mut controller, &mut state, AppIntent::DrawingCancelRequested);

    assert!(!state.editor.drawing.is_drawing());
    assert!(state.features.is_empty());
    assert!(!state.can_undo());
    assert!(reload(&store).is_empty());
}

#[test]
fn building_fans_out_to_every_level() {
    let (mut controller, mut state, store) = new_state();
    run(
        &mut controller,
        &mut state,
        AppIntent::LevelChangeRequested { level: 2 },
    );

    draw(
        &mut controller,
        &mut state,
        FeatureType::Building,
        &triangle(),
        Some("Terminal 1"),
    );

    let max_level = state.options.max_level;
    assert_eq!(state.feature_count(), max_level as usize);
    for level in 1..=max_level {
        let on_level: Vec<_> = state.features.on_level(level).collect();
        assert_eq!(on_level.len(), 1);
        let copy = on_level[0];
        assert_eq!(copy.coordinates, triangle());
        assert_eq!(copy.properties.name, format!("Terminal 1 (Level {level})"));
        assert_eq!(
            copy.properties.description,
            format!("Building outline on level {level}")
        );
    }
    let ids: std::collections::HashSet<_> = state.features.iter().map(|f| &f.id).collect();
    assert_eq!(ids.len(), max_level as usize);

    // Ein einziger Undo entfernt alle Kopien
    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.features.is_empty());
    assert!(reload(&store).is_empty());
}

#[test]
fn new_features_land_on_current_level() {
    let (mut controller, mut state, _store) = new_state();
    run(
        &mut controller,
        &mut state,
        AppIntent::LevelChangeRequested { level: 2 },
    );

    draw(&mut controller, &mut state, FeatureType::Toilet, &triangle(), None);

    let feature = &state.features.features()[0];
    assert_eq!(feature.level, 2);
    assert_eq!(feature.properties.description, "A toilet on level 2");
}
