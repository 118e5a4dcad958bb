//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::persistence::{KeyValueStore, MemoryStore};
use crate::shared::{RenderScene2D, RenderScene3D};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Hält den Key-Value-Store für Speichern/Laden.
pub struct AppController {
    store: Box<dyn KeyValueStore>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen neuen Controller mit flüchtigem Store im Speicher.
    pub fn new() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Erstellt einen Controller mit einem externen Store.
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read-only Zugriff auf den Store.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Mutabler Zugriff auf den Store (z.B. zum Vorbelegen in Tests).
    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.store.as_mut()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Werkzeug & Ansicht ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::SetEditorMode { mode } => handlers::view::set_mode(state, mode),

            // === Zeiger-Events ===
            AppCommand::ToolPointerMove { pos } => handlers::tools::pointer_move(state, pos),
            AppCommand::ToolClick { pos } => handlers::tools::click(state, pos),
            AppCommand::ToolPointerLeave => handlers::tools::pointer_leave(state),
            AppCommand::CancelTool => handlers::tools::cancel(state),

            // === Selektion ===
            AppCommand::SelectAt { pos } => handlers::selection::select_at(state, pos),
            AppCommand::SetSelection { id } => handlers::selection::set(state, id),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::InsertObject { object } => handlers::editing::insert(state, object),
            AppCommand::PatchObject { id, patch } => handlers::editing::patch(state, id, &patch),
            AppCommand::RemoveObject { id } => handlers::editing::remove(state, id),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Persistenz ===
            AppCommand::SaveDesign => handlers::file_io::save(state, self.store.as_mut())?,
            AppCommand::LoadDesign => handlers::file_io::load(state, self.store.as_ref())?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options),
            AppCommand::ResetOptions => handlers::view::reset_options(state),
        }

        Ok(())
    }

    /// Baut die 2D-Render-Szene aus dem aktuellen State.
    pub fn build_render_scene_2d(&self, state: &AppState) -> RenderScene2D {
        render_scene::build_2d(state)
    }

    /// Baut die 3D-Render-Szene aus dem aktuellen State.
    pub fn build_render_scene_3d(&self, state: &AppState) -> RenderScene3D {
        render_scene::build_3d(&state.scene)
    }
}
