//! Trait-basiertes Werkzeug-System für die Platzierung von Szenenobjekten.
//!
//! Jedes Werkzeug implementiert den `PlacementTool`-Trait und wird beim
//! `ToolManager` registriert. Tools erzeugen reine Daten (`ToolResult`),
//! die Mutation erfolgt zentral in `use_cases::editing::apply_tool_result`.

/// Möbel-Werkzeug: platziert ein Möbelstück auf dem Rasterpunkt.
pub mod furniture;
/// Tür-/Fenster-Werkzeug: setzt Öffnungen auf getroffene Wände.
pub mod opening;
/// PlacementTool-Trait: Schnittstelle für alle Werkzeuge.
mod placement_tool;
/// Wand-Werkzeug mit Achsen- und Raster-Snap.
pub mod wall;

pub use placement_tool::PlacementTool;

use super::state::EditorTool;
use crate::core::{ObjectId, ObjectKind};
use crate::shared::SnapGuides;
use glam::Vec2;

// ── Typen ────────────────────────────────────────────────────────

/// Preview-Daten für das Rendering der Zeichenfläche.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ToolPreview {
    /// Fixierter Wand-Anker (nur Wand-Werkzeug im Zustand "verankert")
    pub anchor: Option<Vec2>,
    /// Aufgelöste Zeigerposition
    pub cursor: Option<Vec2>,
    /// Aktive Achsen-Führungslinien
    pub guides: SnapGuides,
    /// Wand unter dem Zeiger (Tür-/Fenster-Werkzeug)
    pub target_wall: Option<ObjectId>,
}

/// Ergebnis eines Werkzeugs: reine Daten, keine Mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// Neu einzufügendes Objekt (ID wird zentral vergeben)
    pub object: ObjectKind,
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet die registrierten Platzierungs-Werkzeuge.
pub struct ToolManager {
    tools: Vec<(EditorTool, Box<dyn PlacementTool>)>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen neuen ToolManager mit vorregistrierten Standard-Tools.
    pub fn new() -> Self {
        let mut manager = Self { tools: Vec::new() };
        manager.register(EditorTool::Wall, Box::new(wall::WallTool::new()));
        manager.register(EditorTool::Door, Box::new(opening::OpeningTool::door()));
        manager.register(EditorTool::Window, Box::new(opening::OpeningTool::window()));
        manager.register(
            EditorTool::Furniture,
            Box::new(furniture::FurnitureTool::new()),
        );
        manager
    }

    /// Registriert ein Werkzeug; ein bestehendes für denselben Slot wird ersetzt.
    pub fn register(&mut self, slot: EditorTool, tool: Box<dyn PlacementTool>) {
        self.tools.retain(|(s, _)| *s != slot);
        self.tools.push((slot, tool));
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Slot und Name aller registrierten Tools zurück.
    pub fn tool_names(&self) -> Vec<(EditorTool, &str)> {
        self.tools.iter().map(|(s, t)| (*s, t.name())).collect()
    }

    /// Werkzeug für einen Slot (`None` für das Select-Tool).
    pub fn tool(&self, slot: EditorTool) -> Option<&dyn PlacementTool> {
        self.tools
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, t)| t.as_ref())
    }

    /// Mutable Referenz auf das Werkzeug eines Slots.
    pub fn tool_mut(&mut self, slot: EditorTool) -> Option<&mut dyn PlacementTool> {
        match self.tools.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, tool)) => Some(tool.as_mut()),
            None => None,
        }
    }

    /// Setzt alle Tools zurück.
    pub fn reset_all(&mut self) {
        for (_, tool) in &mut self.tools {
            tool.reset();
        }
    }
}
