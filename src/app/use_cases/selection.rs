//! Use-Case-Funktionen für die Objekt-Selektion.
//!
//! Die Selektion ist ein reiner UI-Cursor: sie wird nicht in der History
//! geführt und besitzt das Objekt nicht.

use crate::app::AppState;
use crate::core::{resolve_hit, ObjectId};
use glam::Vec2;

/// Selektiert das erste getroffene Objekt an `pos` (ungesnappte Position).
///
/// Kein Treffer hebt die Selektion auf.
pub fn select_at(state: &mut AppState, pos: Vec2) {
    let hit = resolve_hit(pos, &state.scene, state.options.wall_hit_margin);
    state.selection.selected_id = hit;
    match hit {
        Some(id) => log::debug!("Objekt {} selektiert", id),
        None => log::debug!("Kein Objekt an ({:.1}, {:.1})", pos.x, pos.y),
    }
}

/// Selektiert ein Objekt per ID. Unbekannte IDs werden ignoriert.
pub fn set_selection(state: &mut AppState, id: ObjectId) {
    if state.scene.contains(id) {
        state.selection.selected_id = Some(id);
    } else {
        log::warn!("Selektion ignoriert: Objekt {} existiert nicht", id);
    }
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected_id = None;
}
