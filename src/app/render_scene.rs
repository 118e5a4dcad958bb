//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{derive_wall_geometry, ObjectId, ObjectKind, OpeningKind, OpeningRef, Scene};
use crate::shared::{
    OrphanOpening, RenderFurniture, RenderScene2D, RenderScene3D, RenderWall2D, WallPreview,
};
use indexmap::IndexMap;

/// Baut die 2D-Render-Szene (Wände, Vorschau, Führungslinien, Selektion).
pub fn build_2d(state: &AppState) -> RenderScene2D {
    let preview = state.editor.preview();
    let selected_id = state.selection.selected_id;

    let walls = state
        .scene
        .walls()
        .map(|(id, wall)| RenderWall2D {
            id,
            wall: wall.clone(),
            selected: selected_id == Some(id),
        })
        .collect();

    let wall_preview = match (preview.anchor, preview.cursor) {
        (Some(start), Some(end)) => Some(WallPreview { start, end }),
        _ => None,
    };

    let tool_status = state
        .editor
        .tool_manager
        .tool(state.editor.active_tool)
        .map(|tool| tool.status_text().to_string());

    RenderScene2D {
        grid_size: state.options.grid_size,
        walls,
        wall_preview,
        snap_guides: preview.guides,
        pointer: preview.cursor,
        target_wall: preview.target_wall,
        selected_id,
        tool_status,
    }
}

/// Baut die 3D-Render-Szene aus einer Szene.
///
/// Jede Wand bekommt ihre Geometrie inkl. aller daran hängenden Öffnungen
/// (in Szenenreihenfolge). Öffnungen ohne auflösbare Wand landen getrennt in
/// `orphan_openings` und werden nicht gerendert.
pub fn build_3d(scene: &Scene) -> RenderScene3D {
    let mut out = RenderScene3D::default();

    // Öffnungen einmalig nach Wand gruppieren, Reihenfolge bleibt die der Szene
    let mut by_wall: IndexMap<ObjectId, Vec<(ObjectId, OpeningRef<'_>)>> = IndexMap::new();
    for object in scene.iter() {
        if let Some(opening) = object.kind.as_opening() {
            if let Some(wall_id) = opening.wall_id() {
                by_wall.entry(wall_id).or_default().push((object.id, opening));
            }
        }
    }

    for object in scene.iter() {
        match &object.kind {
            ObjectKind::Wall(wall) => {
                let openings = by_wall.get(&object.id).into_iter().flatten().copied();
                out.walls.push(derive_wall_geometry(object.id, wall, openings));
            }
            ObjectKind::Furniture(furniture) => out.furniture.push(RenderFurniture {
                id: object.id,
                furniture: furniture.clone(),
            }),
            ObjectKind::Door(_) | ObjectKind::Window(_) => {
                let Some(opening) = object.kind.as_opening() else {
                    continue;
                };
                let attached = opening.wall_id().is_some_and(|id| scene.wall(id).is_some());
                if !attached {
                    out.orphan_openings.push(orphan(object.id, opening));
                }
            }
        }
    }

    out
}

fn orphan(id: ObjectId, opening: OpeningRef<'_>) -> OrphanOpening {
    let (kind, position) = match opening {
        OpeningRef::Door(door) => (OpeningKind::Door, door.position),
        OpeningRef::Window(window) => (OpeningKind::Window, window.position),
    };
    OrphanOpening {
        id,
        kind,
        position,
        width: opening.width(),
        height: opening.height(),
    }
}
