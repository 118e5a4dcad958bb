//! Application State: zentrale Datenhaltung einer Editier-Sitzung.

use super::history::{EditHistory, Snapshot};
use super::tools::{ToolManager, ToolPreview};
use super::CommandLog;
use crate::core::{ObjectId, Scene};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorTool {
    /// Standard: Objekte per Klick selektieren
    #[default]
    Select,
    /// Wände zeichnen (Start- und Endpunkt klicken)
    Wall,
    /// Türen an Wände setzen
    Door,
    /// Fenster an Wände setzen
    Window,
    /// Möbel platzieren
    Furniture,
}

/// Ansichtsmodus (2D-Zeichenfläche oder 3D-Szene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// 2D-Grundriss
    #[default]
    TwoD,
    /// 3D-Ansicht
    ThreeD,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Platzierungs-Werkzeuge (Wand, Tür, Fenster, Möbel)
    pub tool_manager: ToolManager,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// Live-Vorschau des aktiven Werkzeugs (leer beim Select-Tool).
    pub fn preview(&self) -> ToolPreview {
        self.tool_manager
            .tool(self.active_tool)
            .map(|tool| tool.preview())
            .unwrap_or_default()
    }
}

/// Auswahlbezogener Anwendungszustand (reiner UI-Cursor, kein Besitz)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell selektiertes Objekt
    pub selected_id: Option<ObjectId>,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// 2D- oder 3D-Ansicht
    pub mode: EditorMode,
    /// Temporäre Statusnachricht (z.B. Lade-/Speicher-Ergebnis)
    pub status_message: Option<String>,
}

/// Vergibt monoton steigende Objekt-IDs. Liegt außerhalb der Snapshots,
/// damit Undo nie eine bereits vergebene ID wieder freigibt.
///
/// `next == None` heißt: der ID-Raum ist erschöpft, es wird nichts mehr vergeben.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Option<ObjectId>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdAllocator {
    /// Liefert die nächste freie ID (`None`, wenn keine mehr frei ist).
    pub fn allocate(&mut self) -> Option<ObjectId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// Stellt sicher, dass künftige IDs größer als `id` sind.
    pub fn ensure_above(&mut self, id: ObjectId) {
        self.next = match (self.next, id.checked_add(1)) {
            (Some(next), Some(floor)) => Some(next.max(floor)),
            _ => None,
        };
    }

    /// Die als nächstes vergebene ID.
    pub fn peek(&self) -> Option<ObjectId> {
        self.next
    }
}

/// Hauptzustand einer Editier-Sitzung
pub struct AppState {
    /// Aktuelle Szene (Arc für O(1)-Snapshots)
    pub scene: Arc<Scene>,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// ID-Vergabe
    pub ids: IdAllocator,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Selection-State
    pub selection: SelectionState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Arc::new(Scene::new()),
            history: EditHistory::with_limit(options.history_limit),
            ids: IdAllocator::default(),
            editor: EditorToolState::new(),
            selection: SelectionState::default(),
            ui: UiState::default(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Objekte zurück (für UI-Anzeige)
    pub fn object_count(&self) -> usize {
        self.scene.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap: Snapshot = self.scene.clone();
        self.history.record_snapshot(snap);
    }

    /// Mutable Szene (CoW: klont nur, wenn ein Snapshot die Szene teilt).
    pub fn scene_mut(&mut self) -> &mut Scene {
        Arc::make_mut(&mut self.scene)
    }

    /// Letzte aufgelöste Zeigerposition des aktiven Werkzeugs.
    pub fn pointer_position(&self) -> Option<Vec2> {
        self.editor.preview().cursor
    }

    /// Verwirft die Selektion, wenn sie auf kein Objekt der Szene mehr zeigt.
    pub fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selection.selected_id {
            if !self.scene.contains(id) {
                self.selection.selected_id = None;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
