//! Use-Case: Ergebnis eines Platzierungs-Werkzeugs anwenden.

use super::insert_object;
use crate::app::tools::ToolResult;
use crate::app::AppState;
use crate::core::ObjectId;

/// Wendet ein `ToolResult` auf den AppState an (ein Undo-Schritt).
///
/// Gibt die ID des neuen Objekts zurück.
pub fn apply_tool_result(state: &mut AppState, result: ToolResult) -> Option<ObjectId> {
    insert_object(state, result.object)
}
