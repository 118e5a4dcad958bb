use super::super::state::{EditorMode, EditorTool};
use crate::core::{ObjectId, ObjectKind, ObjectPatch};
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger über der Zeichenfläche bewegt (Zeichenebene-Koordinaten)
    PointerMoved { pos: glam::Vec2 },
    /// Klick auf die Zeichenfläche
    PointerClicked { pos: glam::Vec2 },
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeft,
    /// Escape: laufende Eingabe abbrechen, sonst Selektion aufheben
    CancelRequested,

    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Zwischen 2D- und 3D-Ansicht wechseln
    SetModeRequested { mode: EditorMode },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Objekt selektieren (`None` hebt die Selektion auf)
    SelectObjectRequested { id: Option<ObjectId> },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Selektiertes Objekt löschen
    DeleteSelectedRequested,

    /// Objekt direkt hinzufügen (z.B. aus einem Eigenschaften-Panel)
    AddObjectRequested { object: ObjectKind },
    /// Felder eines Objekts ändern
    UpdateObjectRequested { id: ObjectId, patch: ObjectPatch },
    /// Objekt entfernen
    RemoveObjectRequested { id: ObjectId },

    /// Design im Key-Value-Store speichern
    SaveRequested,
    /// Design aus dem Key-Value-Store laden
    LoadRequested,

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
