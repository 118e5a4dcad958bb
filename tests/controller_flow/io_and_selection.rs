use super::{draw_wall, state_with_wall};
use floorplan_editor::{
    AppController, AppIntent, AppState, EditorMode, FileStore, Furniture, KeyValueStore,
    ObjectKind, WallRenderMode,
};
use glam::{Vec2, Vec3};

#[test]
fn test_select_click_hits_and_misses() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let id = state.scene.walls().next().map(|(id, _)| id);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerClicked {
                pos: Vec2::new(150.0, -4.0),
            },
        )
        .expect("Klick sollte funktionieren");
    assert_eq!(state.selection.selected_id, id);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerClicked {
                pos: Vec2::new(150.0, 40.0),
            },
        )
        .expect("Klick sollte funktionieren");
    assert_eq!(state.selection.selected_id, None);
}

#[test]
fn test_escape_clears_selection_without_pending_input() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let id = state.scene.walls().next().map(|(id, _)| id);

    controller
        .handle_intent(&mut state, AppIntent::SelectObjectRequested { id })
        .expect("Selektion sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::CancelRequested)
        .expect("CancelRequested sollte funktionieren");

    assert_eq!(state.selection.selected_id, None);
}

#[test]
fn test_selection_is_highlighted_in_2d_scene() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();
    let id = state.scene.walls().next().map(|(id, _)| id);
    controller
        .handle_intent(&mut state, AppIntent::SelectObjectRequested { id })
        .expect("Selektion sollte funktionieren");

    let scene_2d = controller.build_render_scene_2d(&state);
    assert_eq!(scene_2d.walls.len(), 1);
    assert!(scene_2d.walls[0].selected);
    assert_eq!(scene_2d.selected_id, id);
}

#[test]
fn test_save_and_load_roundtrip_through_controller() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_wall(&mut controller, &mut state, Vec2::ZERO, Vec2::new(200.0, 0.0));
    super::use_tool(&mut controller, &mut state, floorplan_editor::EditorTool::Window);
    super::move_and_click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    let saved = state.scene.to_objects();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern sollte funktionieren");

    let mut fresh = AppState::new();
    controller
        .handle_intent(&mut fresh, AppIntent::LoadRequested)
        .expect("Laden sollte funktionieren");

    assert_eq!(fresh.scene.to_objects(), saved);
    assert!(!fresh.can_undo());
    assert!(fresh.ui.status_message.is_some());

    // Neue IDs liegen hinter den geladenen
    draw_wall(&mut controller, &mut fresh, Vec2::new(0.0, 60.0), Vec2::new(200.0, 60.0));
    let max_loaded = saved.iter().map(|o| o.id).max().expect("Objekte erwartet");
    assert_eq!(fresh.scene.max_id(), Some(max_loaded + 1));
}

#[test]
fn test_load_without_saved_design_fails_and_keeps_state() {
    let mut controller = AppController::new();
    let mut state = state_with_wall();

    let err = controller
        .handle_intent(&mut state, AppIntent::LoadRequested)
        .expect_err("Laden ohne gespeichertes Design sollte fehlschlagen");

    assert!(err.to_string().contains("Kein gespeichertes Design"));
    assert_eq!(state.object_count(), 1);
    assert!(state.can_undo());
}

#[test]
fn test_load_malformed_design_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let key = state.options.storage_key.clone();
    controller
        .store_mut()
        .set(&key, br#"[{"id": 1, "type": "wall"}]"#)
        .expect("Store sollte schreiben");

    let err = controller
        .handle_intent(&mut state, AppIntent::LoadRequested)
        .expect_err("Kaputte Daten sollten fehlschlagen");

    assert!(format!("{err:#}").contains("malformed persisted design"));
    assert!(state.scene.is_empty());
}

#[test]
fn test_file_store_persists_between_controllers() {
    let tmp = std::env::temp_dir().join("test_floorplan_file_store_flow");
    let _ = std::fs::remove_dir_all(&tmp);

    let mut state = AppState::new();
    {
        let mut controller = AppController::with_store(Box::new(FileStore::new(&tmp)));
        draw_wall(&mut controller, &mut state, Vec2::ZERO, Vec2::new(0.0, 120.0));
        controller
            .handle_intent(&mut state, AppIntent::SaveRequested)
            .expect("Speichern sollte funktionieren");
    }

    let mut controller = AppController::with_store(Box::new(FileStore::new(&tmp)));
    let mut loaded = AppState::new();
    controller
        .handle_intent(&mut loaded, AppIntent::LoadRequested)
        .expect("Laden sollte funktionieren");
    assert_eq!(loaded.scene.to_objects(), state.scene.to_objects());

    controller
        .handle_intent(
            &mut loaded,
            AppIntent::SetModeRequested {
                mode: EditorMode::ThreeD,
            },
        )
        .expect("Moduswechsel sollte funktionieren");
    let scene_3d = controller.build_render_scene_3d(&loaded);
    assert_eq!(scene_3d.walls.len(), 1);
    assert_eq!(scene_3d.walls[0].render_mode, WallRenderMode::WithOpenings);
    assert!(scene_3d.walls[0].cuts.is_empty());

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn test_loaded_furniture_keeps_model() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let key = state.options.storage_key.clone();
    let json = r#"[
        {"id": 7, "type": "furniture", "position": [10.0, 0.0, 20.0],
         "rotation": [0.0, 0.0, 0.0], "scale": [1.0, 1.0, 1.0], "model": "sofa"}
    ]"#;
    controller
        .store_mut()
        .set(&key, json.as_bytes())
        .expect("Store sollte schreiben");

    controller
        .handle_intent(&mut state, AppIntent::LoadRequested)
        .expect("Laden sollte funktionieren");

    match &state.scene.get(7).expect("Objekt 7 erwartet").kind {
        ObjectKind::Furniture(f) => assert_eq!(f.model, "sofa"),
        other => panic!("Möbel erwartet, erhalten: {other:?}"),
    }
    assert_eq!(state.ids.peek(), Some(8));
}

#[test]
fn test_insert_after_loading_max_id_keeps_loaded_wall() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let key = state.options.storage_key.clone();
    let json = r#"[
        {"id": 18446744073709551615, "type": "wall", "start": [0.0, 0.0],
         "end": [100.0, 0.0], "height": 100.0, "thickness": 10.0}
    ]"#;
    controller
        .store_mut()
        .set(&key, json.as_bytes())
        .expect("Store sollte schreiben");
    controller
        .handle_intent(&mut state, AppIntent::LoadRequested)
        .expect("Laden sollte funktionieren");
    assert_eq!(state.ids.peek(), None);

    for _ in 0..2 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::AddObjectRequested {
                    object: ObjectKind::Furniture(Furniture {
                        position: Vec3::ZERO,
                        rotation: Vec3::ZERO,
                        scale: Vec3::ONE,
                        model: "chair".into(),
                    }),
                },
            )
            .expect("AddObjectRequested sollte kein Fehler sein");
    }

    assert_eq!(state.object_count(), 1);
    assert!(state.scene.wall(u64::MAX).is_some());
    assert!(!state.can_undo());
}
