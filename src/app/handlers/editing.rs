//! Handler für Objekt-Editing und Editor-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ObjectId, ObjectKind, ObjectPatch};

/// Aktiviert ein Editor-Werkzeug.
///
/// Ein Werkzeugwechsel hebt die Selektion auf und bricht laufendes Zeichnen ab.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.tool_manager.reset_all();
    state.editor.active_tool = tool;
    state.selection.selected_id = None;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Fügt ein Objekt mit neuer ID ein.
pub fn insert(state: &mut AppState, object: ObjectKind) {
    use_cases::editing::insert_object(state, object);
}

/// Ändert Felder eines Objekts.
pub fn patch(state: &mut AppState, id: ObjectId, patch: &ObjectPatch) {
    use_cases::editing::patch_object(state, id, patch);
}

/// Entfernt ein Objekt.
pub fn remove(state: &mut AppState, id: ObjectId) {
    use_cases::editing::remove_object(state, id);
}

/// Löscht das aktuell selektierte Objekt.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}
