//! Floorplan Editor Library.
//! Szenen-Engine (Datenmodell, Undo-History, Zeichnen/Snapping, 3D-Wandgeometrie)
//! als Library exportiert für Tests, Frontends und Wiederverwendung.

pub mod app;
pub mod core;
pub mod persistence;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditHistory, EditorMode, EditorTool,
    EditorToolState, SelectionState, UiState,
};
pub use core::{
    Door, Furniture, ObjectId, ObjectKind, ObjectPatch, ObjectType, Scene, SceneObject, Wall,
    WallGeometry, WallRenderMode, Window,
};
pub use persistence::{parse_design, write_design, FileStore, KeyValueStore, MemoryStore};
pub use shared::{EditorOptions, RenderScene2D, RenderScene3D};
