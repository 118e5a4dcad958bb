//! Use-Case: Objekte entfernen.

use crate::app::AppState;
use crate::core::ObjectId;

/// Entfernt das Objekt `id` aus der Szene.
///
/// Öffnungen einer entfernten Wand bleiben erhalten. Zeigt die Selektion
/// auf das entfernte Objekt, wird sie aufgehoben.
/// Gibt `true` zurück, wenn ein Objekt entfernt wurde.
pub fn remove_object(state: &mut AppState, id: ObjectId) -> bool {
    if !state.scene.contains(id) {
        log::debug!("Entfernen ignoriert: Objekt {} existiert nicht", id);
        return false;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    state.scene_mut().remove(id);

    if state.selection.selected_id == Some(id) {
        state.selection.selected_id = None;
    }

    log::info!("Objekt {} entfernt", id);
    true
}

/// Entfernt das selektierte Objekt und hebt die Selektion auf.
pub fn delete_selected(state: &mut AppState) -> bool {
    let Some(id) = state.selection.selected_id else {
        log::debug!("Nichts zum Löschen selektiert");
        return false;
    };
    let removed = remove_object(state, id);
    state.selection.selected_id = None;
    removed
}
