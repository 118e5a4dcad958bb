//! Floorplan Editor (Headless).
//!
//! Liest ein gespeichertes Design (JSON) und gibt die daraus abgeleitete
//! 3D-Render-Szene als JSON auf stdout aus. Ohne Argument wird das Design
//! unter dem konfigurierten Schlüssel im Datei-Store neben der Binary gelesen.
//!
//! Aufruf: `floorplan-editor [design.json]`

use anyhow::Context;
use floorplan_editor::{
    AppController, AppIntent, AppState, EditorOptions, FileStore, KeyValueStore,
};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren (Ausgabe auf stderr, stdout bleibt für JSON frei)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Floorplan Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);
    let mut state = AppState::with_options(options);

    let design_path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut controller = match &design_path {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Design nicht lesbar: {}", path.display()))?;
            // Datei als einzigen Eintrag eines flüchtigen Stores bereitstellen
            let mut controller = AppController::new();
            controller
                .store_mut()
                .set(&state.options.storage_key, &bytes)?;
            controller
        }
        None => AppController::with_store(Box::new(FileStore::new(store_dir(&config_path)))),
    };

    match controller.handle_intent(&mut state, AppIntent::LoadRequested) {
        Ok(()) => {}
        Err(e) if design_path.is_some() => return Err(e),
        Err(e) => log::warn!("Kein Design geladen, verwende leere Szene: {e:#}"),
    }

    let scene = controller.build_render_scene_3d(&state);
    log::info!(
        "{} Wände, {} Möbel, {} Öffnungen ohne Wand",
        scene.walls.len(),
        scene.furniture.len(),
        scene.orphan_openings.len()
    );
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

/// Verzeichnis des Datei-Stores: neben der Optionen-Datei.
fn store_dir(config_path: &std::path::Path) -> PathBuf {
    config_path
        .parent()
        .map(|dir| dir.join("designs"))
        .unwrap_or_else(|| PathBuf::from("designs"))
}
