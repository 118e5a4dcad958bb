//! Use-Case: Neues Objekt in die Szene einfügen.

use crate::app::AppState;
use crate::core::{ObjectId, ObjectKind};

/// Hängt ein Objekt mit frisch vergebener ID ans Ende der Szene an.
///
/// Wände mit Länge 0 werden stillschweigend verworfen (`None`). Ist der
/// ID-Raum erschöpft, wird ebenfalls nichts eingefügt und keine History angelegt.
pub fn insert_object(state: &mut AppState, object: ObjectKind) -> Option<ObjectId> {
    if let ObjectKind::Wall(wall) = &object {
        if !wall.is_valid() {
            log::debug!("Wand mit Länge 0 verworfen");
            return None;
        }
    }

    let Some(id) = state.ids.allocate() else {
        log::warn!("Einfügen abgelehnt: keine freie Objekt-ID mehr");
        return None;
    };
    if state.scene.contains(id) {
        log::warn!("Einfügen abgelehnt: Objekt-ID {} ist bereits vergeben", id);
        return None;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let object_type = object.object_type();
    if !state.scene_mut().insert(id, object) {
        log::warn!("{:?} {} konnte nicht eingefügt werden", object_type, id);
        return None;
    }

    log::info!("{:?} {} eingefügt", object_type, id);
    Some(id)
}
