//! Handler für Speichern und Laden.

use crate::app::use_cases;
use crate::app::AppState;
use crate::persistence::KeyValueStore;

/// Speichert das aktuelle Design im Store.
pub fn save(state: &mut AppState, store: &mut dyn KeyValueStore) -> anyhow::Result<()> {
    use_cases::file_io::save_design(state, store)
}

/// Lädt das Design aus dem Store.
pub fn load(state: &mut AppState, store: &dyn KeyValueStore) -> anyhow::Result<()> {
    use_cases::file_io::load_design(state, store)
}
