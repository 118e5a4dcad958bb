//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Editier-Sitzung (Szene, History, Werkzeuge).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot};
pub use render_scene::{build_2d as build_render_scene_2d, build_3d as build_render_scene_3d};
pub use state::{
    AppState, EditorMode, EditorTool, EditorToolState, IdAllocator, SelectionState, UiState,
};
