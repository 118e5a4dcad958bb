//! Use-Case-Funktionen für Speichern und Laden von Designs.
//! Der Key-Value-Store wird vom Controller übergeben.

use crate::app::AppState;
use crate::persistence::{parse_design_bytes, write_design, KeyValueStore};
use anyhow::{anyhow, Context};
use std::sync::Arc;

/// Speichert die aktuelle Szene unter `options.storage_key`.
///
/// Szene und History bleiben unverändert.
pub fn save_design(state: &mut AppState, store: &mut dyn KeyValueStore) -> anyhow::Result<()> {
    let json = write_design(&state.scene)?;
    let key = state.options.storage_key.clone();
    store
        .set(&key, json.as_bytes())
        .with_context(|| format!("Design konnte nicht gespeichert werden ({key})"))?;

    log::info!("Design gespeichert: {} Objekte unter '{}'", state.object_count(), key);
    state.ui.status_message = Some(format!("{} Objekte gespeichert", state.object_count()));
    Ok(())
}

/// Lädt das Design unter `options.storage_key` und ersetzt die Szene.
///
/// Bei Erfolg werden History und Selektion verworfen und laufendes Zeichnen
/// abgebrochen. Bei fehlendem Schlüssel oder fehlerhaften Daten bleibt der
/// gesamte Zustand unverändert und ein Fehler wird zurückgegeben.
pub fn load_design(state: &mut AppState, store: &dyn KeyValueStore) -> anyhow::Result<()> {
    let key = state.options.storage_key.clone();
    let bytes = store
        .get(&key)?
        .ok_or_else(|| anyhow!("Kein gespeichertes Design unter '{key}'"))?;
    let scene = parse_design_bytes(&bytes)?;

    if let Some(max_id) = scene.max_id() {
        state.ids.ensure_above(max_id);
    }
    log::info!("Design geladen: {} Objekte aus '{}'", scene.len(), key);

    state.scene = Arc::new(scene);
    state.history.clear();
    state.selection.selected_id = None;
    state.editor.tool_manager.reset_all();
    state.ui.status_message = Some(format!("{} Objekte geladen", state.object_count()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::editing::insert_object;
    use crate::core::{Furniture, ObjectKind};
    use crate::persistence::MemoryStore;
    use glam::Vec3;

    fn chair() -> ObjectKind {
        ObjectKind::Furniture(Furniture {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            model: "chair".into(),
        })
    }

    #[test]
    fn save_then_load_restores_scene_and_resets_history() {
        let mut store = MemoryStore::new();
        let mut state = AppState::new();
        let id = insert_object(&mut state, chair()).expect("ID");
        save_design(&mut state, &mut store).expect("Speichern fehlgeschlagen");

        let mut other = AppState::new();
        insert_object(&mut other, chair());
        insert_object(&mut other, chair());
        other.selection.selected_id = Some(1);
        load_design(&mut other, &store).expect("Laden fehlgeschlagen");

        assert_eq!(other.object_count(), 1);
        assert!(other.scene.contains(id));
        assert!(!other.can_undo());
        assert!(!other.can_redo());
        assert_eq!(other.selection.selected_id, None);
    }

    #[test]
    fn load_missing_key_fails_without_changes() {
        let store = MemoryStore::new();
        let mut state = AppState::new();
        insert_object(&mut state, chair());

        assert!(load_design(&mut state, &store).is_err());
        assert_eq!(state.object_count(), 1);
        assert!(state.can_undo());
    }

    #[test]
    fn load_malformed_data_fails_without_changes() {
        let mut store = MemoryStore::new();
        store
            .set(crate::shared::STORAGE_KEY, b"[{\"id\": 1, \"type\": ")
            .expect("set");
        let mut state = AppState::new();
        insert_object(&mut state, chair());

        let err = load_design(&mut state, &store).expect_err("Laden sollte fehlschlagen");

        assert!(format!("{err:#}").contains("malformed persisted design"));
        assert_eq!(state.object_count(), 1);
        assert!(state.can_undo());
    }

    #[test]
    fn load_advances_id_allocator_past_loaded_ids() {
        let mut store = MemoryStore::new();
        store
            .set(
                crate::shared::STORAGE_KEY,
                br#"[{"id": 41, "type": "furniture", "position": [0,0,0], "rotation": [0,0,0], "scale": [1,1,1], "model": "sofa"}]"#,
            )
            .expect("set");
        let mut state = AppState::new();

        load_design(&mut state, &store).expect("Laden fehlgeschlagen");
        let id = insert_object(&mut state, chair()).expect("ID");

        assert_eq!(id, 42);
    }
}
