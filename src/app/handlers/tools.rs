//! Handler für Zeiger-Events der Platzierungs-Werkzeuge.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Leitet eine Zeigerbewegung an das aktive Werkzeug weiter.
pub fn pointer_move(state: &mut AppState, pos: Vec2) {
    let active = state.editor.active_tool;
    if let Some(tool) = state.editor.tool_manager.tool_mut(active) {
        tool.on_pointer_move(pos, &state.scene, &state.options);
    }
}

/// Verarbeitet einen Klick im aktiven Werkzeug und übernimmt ggf. das Ergebnis.
pub fn click(state: &mut AppState, pos: Vec2) {
    let active = state.editor.active_tool;
    let Some(tool) = state.editor.tool_manager.tool_mut(active) else {
        log::debug!("Kein Platzierungs-Werkzeug aktiv ({:?})", active);
        return;
    };
    let result = tool.on_click(pos, &state.scene, &state.options);

    if let Some(result) = result {
        use_cases::editing::apply_tool_result(state, result);
    }
}

/// Zeiger hat die Zeichenfläche verlassen: laufendes Zeichnen abbrechen.
pub fn pointer_leave(state: &mut AppState) {
    let active = state.editor.active_tool;
    if let Some(tool) = state.editor.tool_manager.tool_mut(active) {
        tool.on_pointer_leave();
    }
}

/// Bricht die Eingabe des aktiven Werkzeugs ab (Escape).
pub fn cancel(state: &mut AppState) {
    let active = state.editor.active_tool;
    if let Some(tool) = state.editor.tool_manager.tool_mut(active) {
        tool.reset();
        log::debug!("Werkzeug-Eingabe abgebrochen");
    }
}
