//! Use-Case-Funktionen für das Bearbeiten der Szene.
//!
//! Aufgeteilt nach Operation:
//! - `insert`: Objekt mit neuer ID anhängen
//! - `patch`: Felder eines Objekts ändern
//! - `remove`: Objekt bzw. Selektion entfernen
//! - `apply_tool_result`: Werkzeug-Ergebnis übernehmen
//!
//! Jede erfolgreiche Mutation legt genau einen Undo-Snapshot an.
//! Abgelehnte oder wirkungslose Aufrufe verändern weder Szene noch History.

mod apply_tool_result;
mod insert;
mod patch;
mod remove;

pub use apply_tool_result::apply_tool_result;
pub use insert::insert_object;
pub use patch::patch_object;
pub use remove::{delete_selected, remove_object};
