use super::{draw_wall, move_and_click, state_with_wall, use_tool};
use floorplan_editor::{AppCommand, AppController, AppIntent, AppState, EditorTool, ObjectKind};
use glam::{Vec2, Vec3};

#[test]
fn test_wall_tool_commits_snapped_wall() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_wall(
        &mut controller,
        &mut state,
        Vec2::new(1.0, 2.0),
        Vec2::new(98.0, 41.0),
    );

    let walls: Vec<_> = state.scene.walls().collect();
    assert_eq!(walls.len(), 1);
    assert_eq!(walls[0].1.start, Vec2::ZERO);
    assert_eq!(walls[0].1.end, Vec2::new(100.0, 40.0));
    assert_eq!(state.history.past().len(), 1);
    assert!(state.history.past()[0].is_empty());

    assert!(state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::ToolClick { .. })));
}

#[test]
fn test_zero_length_wall_commit_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_wall(&mut controller, &mut state, Vec2::ZERO, Vec2::new(4.0, 3.0));

    assert!(state.scene.is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_axis_snap_keeps_wall_horizontal() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_wall(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 40.0),
        Vec2::new(157.0, 47.0),
    );

    let (_, wall) = state.scene.walls().next().expect("Wand erwartet");
    assert_eq!(wall.start, Vec2::new(0.0, 40.0));
    assert_eq!(wall.end, Vec2::new(160.0, 40.0));
}

#[test]
fn test_pointer_leave_cancels_anchor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    use_tool(&mut controller, &mut state, EditorTool::Wall);
    move_and_click(&mut controller, &mut state, Vec2::new(20.0, 20.0));

    controller
        .handle_intent(&mut state, AppIntent::PointerLeft)
        .expect("PointerLeft sollte funktionieren");
    // Nächster Klick setzt nur einen neuen Anker
    move_and_click(&mut controller, &mut state, Vec2::new(120.0, 20.0));

    assert!(state.scene.is_empty());
    assert_eq!(state.pointer_position(), Some(Vec2::new(120.0, 20.0)));
}

#[test]
fn test_escape_cancels_drawing_before_clearing_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    use_tool(&mut controller, &mut state, EditorTool::Wall);
    move_and_click(&mut controller, &mut state, Vec2::ZERO);

    controller
        .handle_intent(&mut state, AppIntent::CancelRequested)
        .expect("CancelRequested sollte funktionieren");
    move_and_click(&mut controller, &mut state, Vec2::new(100.0, 0.0));

    assert!(state.scene.is_empty());
    assert!(matches!(
        state.command_log.entries().iter().rev().nth(2),
        Some(AppCommand::CancelTool)
    ));
}

#[test]
fn test_tool_switch_clears_selection_and_cancels_drawing() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    state.selection.selected_id = state.scene.walls().next().map(|(id, _)| id);

    use_tool(&mut controller, &mut state, EditorTool::Wall);
    assert_eq!(state.selection.selected_id, None);

    move_and_click(&mut controller, &mut state, Vec2::new(0.0, 100.0));
    use_tool(&mut controller, &mut state, EditorTool::Furniture);
    use_tool(&mut controller, &mut state, EditorTool::Wall);
    move_and_click(&mut controller, &mut state, Vec2::new(100.0, 100.0));

    assert_eq!(state.object_count(), 1);
}

#[test]
fn test_door_tool_attaches_door_to_clicked_wall() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let (wall_id, _) = state.scene.walls().next().expect("Wand erwartet");

    use_tool(&mut controller, &mut state, EditorTool::Door);
    move_and_click(&mut controller, &mut state, Vec2::new(50.0, 2.0));

    let door = state
        .scene
        .iter()
        .find_map(|o| match &o.kind {
            ObjectKind::Door(door) => Some(door.clone()),
            _ => None,
        })
        .expect("Tür erwartet");
    assert_eq!(door.wall_id, Some(wall_id));
    assert_eq!(door.position_on_wall, 0.25);
    assert_eq!(door.position, Vec3::new(50.0, 0.0, 0.0));
    assert_eq!(state.history.past().len(), 2);
}

#[test]
fn test_window_tool_ignores_clicks_off_walls() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();

    use_tool(&mut controller, &mut state, EditorTool::Window);
    move_and_click(&mut controller, &mut state, Vec2::new(50.0, 60.0));

    assert_eq!(state.object_count(), 1);
    assert_eq!(state.history.past().len(), 1);
}

#[test]
fn test_furniture_tool_places_model_on_grid() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    use_tool(&mut controller, &mut state, EditorTool::Furniture);
    move_and_click(&mut controller, &mut state, Vec2::new(71.0, 29.0));

    match &state.scene.iter().next().expect("Möbel erwartet").kind {
        ObjectKind::Furniture(f) => {
            assert_eq!(f.position, Vec3::new(80.0, 0.0, 20.0));
            assert_eq!(f.model, "chair");
        }
        other => panic!("Möbel erwartet, erhalten: {other:?}"),
    };
}
