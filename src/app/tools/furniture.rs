//! Möbel-Werkzeug: Ein Klick platziert ein Möbelstück auf dem Rasterpunkt.

use super::{PlacementTool, ToolPreview, ToolResult};
use crate::core::{snap_to_grid, Furniture, ObjectKind, Scene};
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Möbel-Werkzeug
#[derive(Default)]
pub struct FurnitureTool {
    cursor: Option<Vec2>,
}

impl FurnitureTool {
    /// Erstellt ein neues Möbel-Werkzeug.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlacementTool for FurnitureTool {
    fn name(&self) -> &str {
        "Möbel"
    }

    fn status_text(&self) -> &str {
        "Position wählen"
    }

    fn on_pointer_move(&mut self, pos: Vec2, _scene: &Scene, options: &EditorOptions) {
        self.cursor = Some(snap_to_grid(pos, options.grid_size));
    }

    fn on_click(
        &mut self,
        pos: Vec2,
        _scene: &Scene,
        options: &EditorOptions,
    ) -> Option<ToolResult> {
        let point = snap_to_grid(pos, options.grid_size);
        Some(ToolResult {
            object: ObjectKind::Furniture(Furniture {
                position: Vec3::new(point.x, 0.0, point.y),
                rotation: Vec3::ZERO,
                scale: Vec3::from_array(options.furniture_scale),
                model: options.furniture_model.clone(),
            }),
        })
    }

    fn preview(&self) -> ToolPreview {
        ToolPreview {
            cursor: self.cursor,
            ..ToolPreview::default()
        }
    }

    fn reset(&mut self) {
        self.cursor = None;
    }
}
