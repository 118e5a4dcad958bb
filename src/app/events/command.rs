use super::super::state::{EditorMode, EditorTool};
use crate::core::{ObjectId, ObjectKind, ObjectPatch};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln (hebt Selektion auf, bricht Zeichnen ab)
    SetEditorTool { tool: EditorTool },
    /// Ansichtsmodus setzen
    SetEditorMode { mode: EditorMode },

    /// Aktives Werkzeug: Zeigerbewegung
    ToolPointerMove { pos: glam::Vec2 },
    /// Aktives Werkzeug: Klick verarbeiten (ggf. Objekt einfügen)
    ToolClick { pos: glam::Vec2 },
    /// Aktives Werkzeug: Zeiger verlassen
    ToolPointerLeave,
    /// Aktives Werkzeug: Eingabe abbrechen
    CancelTool,

    /// Objekt unter der Position selektieren (Treffer oder nichts)
    SelectAt { pos: glam::Vec2 },
    /// Objekt per ID selektieren
    SetSelection { id: ObjectId },
    /// Selektion aufheben
    ClearSelection,

    /// Objekt mit neuer ID anhängen
    InsertObject { object: ObjectKind },
    /// Felder eines bestehenden Objekts ändern
    PatchObject { id: ObjectId, patch: ObjectPatch },
    /// Objekt entfernen
    RemoveObject { id: ObjectId },
    /// Selektiertes Objekt entfernen
    DeleteSelected,

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Design speichern
    SaveDesign,
    /// Design laden
    LoadDesign,

    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
