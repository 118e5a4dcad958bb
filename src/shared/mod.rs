//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und externen Renderern geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{GRID_SIZE, STORAGE_KEY};
pub use render_scene::{
    OrphanOpening, RenderFurniture, RenderScene2D, RenderScene3D, RenderWall2D, SnapGuides,
    WallPreview,
};
