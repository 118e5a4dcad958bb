//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = state.scene.clone();
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        state.scene = prev;
        state.drop_stale_selection();
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let current = state.scene.clone();
    if let Some(next) = state.history.pop_redo_with_current(current) {
        state.scene = next;
        state.drop_stale_selection();
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
