use super::{draw_wall, state_with_wall};
use floorplan_editor::{
    AppCommand, AppController, AppIntent, AppState, ObjectKind, ObjectPatch, Scene, Window,
};
use glam::{Vec2, Vec3};
use std::sync::Arc;

fn first_wall_id(state: &AppState) -> u64 {
    state.scene.walls().next().map(|(id, _)| id).expect("Wand erwartet")
}

#[test]
fn test_undo_then_redo_restores_identical_scene() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_wall(&mut controller, &mut state, Vec2::ZERO, Vec2::new(100.0, 0.0));
    let after_draw = Arc::clone(&state.scene);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte funktionieren");
    assert!(state.scene.is_empty());
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo sollte funktionieren");
    assert!(Arc::ptr_eq(&state.scene, &after_draw));
    assert!(!state.can_redo());
}

#[test]
fn test_new_mutation_clears_redo() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte funktionieren");
    assert!(state.can_redo());

    draw_wall(&mut controller, &mut state, Vec2::ZERO, Vec2::new(0.0, 80.0));

    assert!(!state.can_redo());
    assert_eq!(state.object_count(), 1);
}

#[test]
fn test_ids_are_not_reused_after_undo() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let first = first_wall_id(&state);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte funktionieren");
    draw_wall(&mut controller, &mut state, Vec2::ZERO, Vec2::new(0.0, 80.0));

    assert_ne!(first_wall_id(&state), first);
}

#[test]
fn test_undo_drops_dangling_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let id = first_wall_id(&state);

    controller
        .handle_intent(&mut state, AppIntent::SelectObjectRequested { id: Some(id) })
        .expect("Selektion sollte funktionieren");
    assert_eq!(state.selection.selected_id, Some(id));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte funktionieren");

    assert_eq!(state.selection.selected_id, None);
}

#[test]
fn test_patch_wall_moves_attached_window() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let wall_id = first_wall_id(&state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::AddObjectRequested {
                object: ObjectKind::Window(Window {
                    position: Vec3::ZERO,
                    width: 40.0,
                    height: 40.0,
                    elevation: 30.0,
                    wall_id: Some(wall_id),
                    position_on_wall: 0.5,
                }),
            },
        )
        .expect("AddObjectRequested sollte funktionieren");

    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateObjectRequested {
                id: wall_id,
                patch: ObjectPatch {
                    end: Some(Vec2::new(0.0, 200.0)),
                    ..ObjectPatch::default()
                },
            },
        )
        .expect("UpdateObjectRequested sollte funktionieren");

    let window = state
        .scene
        .iter()
        .find_map(|o| match &o.kind {
            ObjectKind::Window(w) => Some(w.clone()),
            _ => None,
        })
        .expect("Fenster erwartet");
    assert_eq!(window.position, Vec3::new(0.0, 30.0, 100.0));
    assert_eq!(state.history.past().len(), 3);
}

#[test]
fn test_rejected_patch_creates_no_history_entry() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let wall_id = first_wall_id(&state);
    let before = Arc::clone(&state.scene);

    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateObjectRequested {
                id: wall_id,
                patch: ObjectPatch {
                    end: Some(Vec2::ZERO),
                    ..ObjectPatch::default()
                },
            },
        )
        .expect("Abgelehnter Patch ist kein Fehler");
    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateObjectRequested {
                id: 999,
                patch: ObjectPatch {
                    height: Some(50.0),
                    ..ObjectPatch::default()
                },
            },
        )
        .expect("Patch auf fehlende ID ist kein Fehler");

    assert!(Arc::ptr_eq(&state.scene, &before));
    assert_eq!(state.history.past().len(), 1);
}

#[test]
fn test_remove_keeps_orphaned_opening() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let wall_id = first_wall_id(&state);
    super::use_tool(
        &mut controller,
        &mut state,
        floorplan_editor::EditorTool::Door,
    );
    super::move_and_click(&mut controller, &mut state, Vec2::new(100.0, 0.0));

    controller
        .handle_intent(&mut state, AppIntent::RemoveObjectRequested { id: wall_id })
        .expect("RemoveObjectRequested sollte funktionieren");

    assert_eq!(state.object_count(), 1);
    let scene_3d = controller.build_render_scene_3d(&state);
    assert!(scene_3d.walls.is_empty());
    assert_eq!(scene_3d.orphan_openings.len(), 1);
}

#[test]
fn test_delete_selected_via_intent() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerClicked {
                pos: Vec2::new(100.0, 3.0),
            },
        )
        .expect("Klick sollte funktionieren");
    assert!(state.selection.selected_id.is_some());

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested sollte funktionieren");

    assert!(state.scene.is_empty());
    assert_eq!(state.selection.selected_id, None);

    match state.command_log.entries().last() {
        Some(AppCommand::DeleteSelected) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_history_limit_caps_undo_depth() {
    let mut controller = AppController::new();
    let mut options = floorplan_editor::EditorOptions::default();
    options.history_limit = Some(2);
    let mut state = AppState::with_options(options);

    for i in 1..=4 {
        let y = i as f32 * 40.0;
        draw_wall(&mut controller, &mut state, Vec2::new(0.0, y), Vec2::new(100.0, y));
    }

    assert_eq!(state.object_count(), 4);
    assert_eq!(state.history.past().len(), 2);
}

#[test]
fn test_undo_after_patch_restores_previous_scene() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let wall_id = first_wall_id(&state);
    super::use_tool(&mut controller, &mut state, floorplan_editor::EditorTool::Window);
    super::move_and_click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    let before: Scene = (*state.scene).clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateObjectRequested {
                id: wall_id,
                patch: ObjectPatch {
                    start: Some(Vec2::new(0.0, 100.0)),
                    thickness: Some(20.0),
                    ..ObjectPatch::default()
                },
            },
        )
        .expect("UpdateObjectRequested sollte funktionieren");
    assert_ne!(*state.scene, before);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte funktionieren");

    assert_eq!(*state.scene, before);
}

#[test]
fn test_undo_after_remove_restores_object_in_place() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    draw_wall(&mut controller, &mut state, Vec2::new(0.0, 40.0), Vec2::new(100.0, 40.0));
    draw_wall(&mut controller, &mut state, Vec2::new(0.0, 80.0), Vec2::new(100.0, 80.0));
    let before: Scene = (*state.scene).clone();
    let ids: Vec<_> = before.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), 3);

    controller
        .handle_intent(&mut state, AppIntent::RemoveObjectRequested { id: ids[1] })
        .expect("RemoveObjectRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte funktionieren");

    assert_eq!(*state.scene, before);
    let restored: Vec<_> = state.scene.iter().map(|o| o.id).collect();
    assert_eq!(restored, ids);
}
