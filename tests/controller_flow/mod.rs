//! Gemeinsame Helfer für die Controller-Flow-Tests.

mod drawing;
mod editing;
mod io_and_selection;

use floorplan_editor::{AppController, AppIntent, AppState, EditorTool, ObjectKind, Wall};
use glam::Vec2;

/// State mit einer einzelnen Wand (0,0) → (200,0), eingefügt über den Controller.
pub fn state_with_wall() -> AppState {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::AddObjectRequested {
                object: ObjectKind::Wall(Wall::new(Vec2::ZERO, Vec2::new(200.0, 0.0), 100.0, 10.0)),
            },
        )
        .expect("AddObjectRequested sollte funktionieren");
    state
}

/// Aktiviert ein Werkzeug.
pub fn use_tool(controller: &mut AppController, state: &mut AppState, tool: EditorTool) {
    controller
        .handle_intent(state, AppIntent::SetEditorToolRequested { tool })
        .expect("Werkzeugwechsel sollte funktionieren");
}

/// Bewegt den Zeiger und klickt an derselben Position.
pub fn move_and_click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerMoved { pos })
        .expect("PointerMoved sollte funktionieren");
    controller
        .handle_intent(state, AppIntent::PointerClicked { pos })
        .expect("PointerClicked sollte funktionieren");
}

/// Zeichnet eine Wand mit dem Wand-Werkzeug.
pub fn draw_wall(controller: &mut AppController, state: &mut AppState, from: Vec2, to: Vec2) {
    use_tool(controller, state, EditorTool::Wall);
    move_and_click(controller, state, from);
    move_and_click(controller, state, to);
}
