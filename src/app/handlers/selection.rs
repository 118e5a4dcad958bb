//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ObjectId;

/// Selektiert das Objekt unter der Position.
pub fn select_at(state: &mut AppState, pos: glam::Vec2) {
    use_cases::selection::select_at(state, pos);
}

/// Selektiert ein Objekt per ID.
pub fn set(state: &mut AppState, id: ObjectId) {
    use_cases::selection::set_selection(state, id);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
