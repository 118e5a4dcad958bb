//! JSON-Codec für gespeicherte Designs.
//!
//! Format: die Szene als JSON-Array von Objekten in Szenenreihenfolge,
//! jedes Objekt mit `id`, `type` und den typspezifischen Feldern.

use crate::core::{ObjectKind, Scene};
use anyhow::{bail, Context, Result};

/// Parsed ein gespeichertes Design aus JSON.
///
/// Schlägt fehl bei ungültigem JSON, unbekannten Objekttypen, doppelten IDs
/// und Wänden mit Länge 0. Der Aufrufer behält in diesem Fall seine Szene.
pub fn parse_design(json: &str) -> Result<Scene> {
    let scene: Scene = serde_json::from_str(json).context("malformed persisted design")?;

    for object in scene.iter() {
        if let ObjectKind::Wall(wall) = &object.kind {
            if !wall.is_valid() {
                bail!(
                    "malformed persisted design: Wand {} hat Länge 0",
                    object.id
                );
            }
        }
    }

    Ok(scene)
}

/// Parsed ein Design aus rohen Bytes (UTF-8).
pub fn parse_design_bytes(bytes: &[u8]) -> Result<Scene> {
    let json = std::str::from_utf8(bytes).context("malformed persisted design: kein UTF-8")?;
    parse_design(json)
}

/// Schreibt eine Szene als JSON-Design.
pub fn write_design(scene: &Scene) -> Result<String> {
    serde_json::to_string_pretty(scene).context("Design konnte nicht serialisiert werden")
}
