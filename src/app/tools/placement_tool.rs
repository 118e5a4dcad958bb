//! PlacementTool-Trait: Schnittstelle für alle Platzierungs-Werkzeuge.

use crate::core::Scene;
use crate::shared::EditorOptions;
use glam::Vec2;

use super::{ToolPreview, ToolResult};

/// Schnittstelle für alle Platzierungs-Werkzeuge (Wand, Tür, Fenster, Möbel).
///
/// Tools sind zustandsbehaftet (Klick-Phasen) und erzeugen Preview-Daten
/// sowie ein `ToolResult` mit dem neuen Objekt. Die Szene wird nur gelesen.
pub trait PlacementTool {
    /// Anzeigename für Toolbar
    fn name(&self) -> &str;

    /// Statustext (z.B. "Startpunkt wählen")
    fn status_text(&self) -> &str;

    /// Zeigerbewegung verarbeiten (aktualisiert nur die Vorschau).
    fn on_pointer_move(&mut self, pos: Vec2, scene: &Scene, options: &EditorOptions);

    /// Klick verarbeiten. Gibt ein Ergebnis zurück, sobald ein Objekt entstehen soll.
    fn on_click(&mut self, pos: Vec2, scene: &Scene, options: &EditorOptions)
        -> Option<ToolResult>;

    /// Zeiger hat die Zeichenfläche verlassen.
    fn on_pointer_leave(&mut self) {
        self.reset();
    }

    /// Aktuelle Vorschau für die 2D-Darstellung.
    fn preview(&self) -> ToolPreview;

    /// Tool-Zustand zurücksetzen (Escape / Tool-Wechsel).
    fn reset(&mut self);

    /// Hat das Tool angefangene Eingaben (z.B. gesetzter Wand-Anker)?
    ///
    /// Wird für die stufenweise Escape-Logik benötigt:
    /// Tool zeichnet → Cancel, Tool idle → Selektion aufheben.
    fn has_pending_input(&self) -> bool {
        false
    }
}
