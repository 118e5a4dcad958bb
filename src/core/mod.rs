//! Core-Domänentypen: Szenenobjekte, Szene, Geometrie, Hit-Test, Wandgeometrie.

pub mod geometry;
/// Szene (geordnete Objekt-Sequenz) als einzige Datenquelle des Editors
pub mod scene;
pub mod scene_object;
pub mod wall_geometry;

pub use geometry::{
    point_in_expanded_bounding_box, project_onto_segment, snap_to_axis, snap_to_axis_detailed,
    snap_to_grid, AxisSnap,
};
pub use hit_test::{resolve_hit, resolve_wall_hit};
pub use scene::{PatchOutcome, Scene};
pub use scene_object::{
    opening_position, Door, Furniture, ObjectId, ObjectKind, ObjectPatch, ObjectType, OpeningRef,
    SceneObject, Wall, Window,
};
pub use wall_geometry::{
    derive_for_scene_wall, derive_wall_geometry, OpeningCut, OpeningKind, WallGeometry,
    WallRenderMode,
};
