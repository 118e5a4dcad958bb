//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, EditorTool};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let select_active = state.editor.active_tool == EditorTool::Select;

    match intent {
        // Im Select-Modus hat die Zeigerbewegung keine Wirkung auf den Zustand
        AppIntent::PointerMoved { .. } if select_active => vec![],
        AppIntent::PointerMoved { pos } => vec![AppCommand::ToolPointerMove { pos }],
        AppIntent::PointerClicked { pos } if select_active => vec![AppCommand::SelectAt { pos }],
        AppIntent::PointerClicked { pos } => vec![AppCommand::ToolClick { pos }],
        AppIntent::PointerLeft if select_active => vec![],
        AppIntent::PointerLeft => vec![AppCommand::ToolPointerLeave],
        AppIntent::CancelRequested => {
            let pending = state
                .editor
                .tool_manager
                .tool(state.editor.active_tool)
                .is_some_and(|tool| tool.has_pending_input());
            if pending {
                vec![AppCommand::CancelTool]
            } else if state.selection.selected_id.is_some() {
                vec![AppCommand::ClearSelection]
            } else {
                vec![]
            }
        }

        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::SetModeRequested { mode } => vec![AppCommand::SetEditorMode { mode }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::SelectObjectRequested { id: Some(id) } => {
            vec![AppCommand::SetSelection { id }]
        }
        AppIntent::SelectObjectRequested { id: None } | AppIntent::ClearSelectionRequested => {
            vec![AppCommand::ClearSelection]
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],

        AppIntent::AddObjectRequested { object } => vec![AppCommand::InsertObject { object }],
        AppIntent::UpdateObjectRequested { id, patch } => {
            vec![AppCommand::PatchObject { id, patch }]
        }
        AppIntent::RemoveObjectRequested { id } => vec![AppCommand::RemoveObject { id }],

        AppIntent::SaveRequested => vec![AppCommand::SaveDesign],
        AppIntent::LoadRequested => vec![AppCommand::LoadDesign],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
