//! Tür-/Fenster-Werkzeug: Ein Klick auf eine Wand setzt eine Öffnung.
//!
//! Die Position entlang der Wand ist die auf [0, 1] geklemmte Projektion
//! des Klickpunkts auf die Wand-Mittellinie.

use super::{PlacementTool, ToolPreview, ToolResult};
use crate::core::{
    project_onto_segment, resolve_wall_hit, snap_to_grid, Door, ObjectId, ObjectKind,
    OpeningKind, Scene, Window,
};
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Tür- oder Fenster-Werkzeug
pub struct OpeningTool {
    kind: OpeningKind,
    cursor: Option<Vec2>,
    target_wall: Option<ObjectId>,
}

impl OpeningTool {
    /// Werkzeug für Türen.
    pub fn door() -> Self {
        Self::new(OpeningKind::Door)
    }

    /// Werkzeug für Fenster.
    pub fn window() -> Self {
        Self::new(OpeningKind::Window)
    }

    fn new(kind: OpeningKind) -> Self {
        Self {
            kind,
            cursor: None,
            target_wall: None,
        }
    }

    fn build(
        &self,
        wall_id: ObjectId,
        position_on_wall: f32,
        options: &EditorOptions,
    ) -> ObjectKind {
        // Position ist abgeleitet und wird beim Einfügen berechnet
        match self.kind {
            OpeningKind::Door => ObjectKind::Door(Door {
                position: Vec3::ZERO,
                width: options.door_width,
                height: options.door_height,
                wall_id: Some(wall_id),
                position_on_wall,
            }),
            OpeningKind::Window => ObjectKind::Window(Window {
                position: Vec3::ZERO,
                width: options.window_width,
                height: options.window_height,
                elevation: options.window_elevation,
                wall_id: Some(wall_id),
                position_on_wall,
            }),
        }
    }
}

impl PlacementTool for OpeningTool {
    fn name(&self) -> &str {
        match self.kind {
            OpeningKind::Door => "Tür",
            OpeningKind::Window => "Fenster",
        }
    }

    fn status_text(&self) -> &str {
        "Wand anklicken"
    }

    fn on_pointer_move(&mut self, pos: Vec2, scene: &Scene, options: &EditorOptions) {
        // Anzeige auf dem Raster, Treffer-Test mit der rohen Position
        self.cursor = Some(snap_to_grid(pos, options.grid_size));
        self.target_wall = resolve_wall_hit(pos, scene, options.wall_hit_margin).map(|(id, _)| id);
    }

    fn on_click(
        &mut self,
        pos: Vec2,
        scene: &Scene,
        options: &EditorOptions,
    ) -> Option<ToolResult> {
        let Some((wall_id, wall)) = resolve_wall_hit(pos, scene, options.wall_hit_margin) else {
            log::debug!("{}: keine Wand unter dem Klick", self.name());
            return None;
        };
        let t = project_onto_segment(pos, wall.start, wall.end);
        Some(ToolResult {
            object: self.build(wall_id, t, options),
        })
    }

    fn preview(&self) -> ToolPreview {
        ToolPreview {
            cursor: self.cursor,
            target_wall: self.target_wall,
            ..ToolPreview::default()
        }
    }

    fn reset(&mut self) {
        self.cursor = None;
        self.target_wall = None;
    }
}
