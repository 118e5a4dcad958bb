//! Use-Case: Felder eines bestehenden Objekts ändern.

use crate::app::AppState;
use crate::core::{ObjectId, ObjectPatch, PatchOutcome};

/// Übernimmt einen Patch in das Objekt `id`.
///
/// Fehlende IDs sind ein No-Op ohne History-Eintrag. Ein Patch, der eine Wand
/// auf Länge 0 zusammenzieht, wird ebenfalls verworfen.
/// Gibt `true` zurück, wenn die Szene verändert wurde.
pub fn patch_object(state: &mut AppState, id: ObjectId, patch: &ObjectPatch) -> bool {
    match state.scene.check_patch(id, patch) {
        PatchOutcome::Missing => {
            log::debug!("Patch ignoriert: Objekt {} existiert nicht", id);
            false
        }
        PatchOutcome::Rejected => {
            log::debug!("Patch verworfen: Wand {} hätte Länge 0", id);
            false
        }
        PatchOutcome::Applied => {
            state.record_undo_snapshot();
            state.scene_mut().patch(id, patch);
            log::info!("Objekt {} geändert", id);
            true
        }
    }
}
