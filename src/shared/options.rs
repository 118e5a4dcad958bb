//! Zentrale Konfiguration für den Floorplan-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Rastergröße der Zeichenfläche (Zeichenebene-Einheiten).
pub const GRID_SIZE: f32 = 20.0;
/// Schwelle für den Achsen-Snap relativ zum Wand-Anker.
pub const AXIS_SNAP_THRESHOLD: f32 = 10.0;
/// Rand um die Wand-Bounding-Box beim Hit-Test.
pub const WALL_HIT_MARGIN: f32 = 5.0;

// ── Standardmaße neuer Objekte ──────────────────────────────────────

/// Standard-Wandhöhe.
pub const WALL_HEIGHT: f32 = 100.0;
/// Standard-Wandstärke.
pub const WALL_THICKNESS: f32 = 10.0;
/// Standard-Türbreite.
pub const DOOR_WIDTH: f32 = 40.0;
/// Standard-Türhöhe.
pub const DOOR_HEIGHT: f32 = 80.0;
/// Standard-Fensterbreite.
pub const WINDOW_WIDTH: f32 = 40.0;
/// Standard-Fensterhöhe.
pub const WINDOW_HEIGHT: f32 = 40.0;
/// Standard-Brüstungshöhe.
pub const WINDOW_ELEVATION: f32 = 30.0;
/// Standard-Möbelmodell.
pub const FURNITURE_MODEL: &str = "chair";

// ── Persistenz ──────────────────────────────────────────────────────

/// Schlüssel des gespeicherten Designs im Key-Value-Store.
pub const STORAGE_KEY: &str = "floorplan-design";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floorplan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Rastergröße für den Grid-Snap
    pub grid_size: f32,
    /// Schwelle für den Achsen-Snap
    pub axis_snap_threshold: f32,
    /// Hit-Test-Rand für Wände
    pub wall_hit_margin: f32,

    // ── Wände ───────────────────────────────────────────────────
    /// Höhe neuer Wände
    pub wall_height: f32,
    /// Stärke neuer Wände
    pub wall_thickness: f32,

    // ── Öffnungen ───────────────────────────────────────────────
    /// Breite neuer Türen
    pub door_width: f32,
    /// Höhe neuer Türen
    pub door_height: f32,
    /// Breite neuer Fenster
    pub window_width: f32,
    /// Höhe neuer Fenster
    pub window_height: f32,
    /// Brüstungshöhe neuer Fenster
    pub window_elevation: f32,

    // ── Möbel ───────────────────────────────────────────────────
    /// Modell-Bezeichner neuer Möbel
    pub furniture_model: String,
    /// Skalierung neuer Möbel
    pub furniture_scale: [f32; 3],

    // ── Verlauf & Persistenz ────────────────────────────────────
    /// Maximale Undo-Tiefe (`None` = unbegrenzt)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
    /// Schlüssel im Key-Value-Store
    pub storage_key: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            axis_snap_threshold: AXIS_SNAP_THRESHOLD,
            wall_hit_margin: WALL_HIT_MARGIN,

            wall_height: WALL_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            door_width: DOOR_WIDTH,
            door_height: DOOR_HEIGHT,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            window_elevation: WINDOW_ELEVATION,

            furniture_model: FURNITURE_MODEL.to_string(),
            furniture_scale: [1.0, 1.0, 1.0],

            history_limit: None,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplan_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floorplan_editor.toml")
    }
}
