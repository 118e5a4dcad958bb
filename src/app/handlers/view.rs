//! Handler für Ansichtsmodus und Optionen.

use crate::app::state::EditorMode;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Wechselt zwischen 2D- und 3D-Ansicht. Szene und History bleiben unberührt.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    state.ui.mode = mode;
    log::info!("Ansichtsmodus: {:?}", mode);
}

/// Übernimmt neue Laufzeit-Optionen.
///
/// Betrifft nur künftig erzeugte Objekte und Snap-Verhalten; die Tiefe einer
/// bestehenden History wird nicht nachträglich angepasst.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!("Optionen übernommen");
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    state.options = EditorOptions::default();
    log::info!("Optionen auf Standardwerte zurückgesetzt");
}
