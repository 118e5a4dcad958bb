//! Wand-Werkzeug: Zwei Klicks (Start, Ende) erzeugen eine Wand.
//!
//! Zeigerpositionen laufen durch dieselbe Pipeline wie Klicks:
//! erst Achsen-Snap relativ zum Anker (nur wenn verankert), dann Raster-Snap.

use super::{PlacementTool, ToolPreview, ToolResult};
use crate::core::{snap_to_axis_detailed, snap_to_grid, ObjectKind, Scene, Wall};
use crate::shared::{EditorOptions, SnapGuides};
use glam::Vec2;

/// Klick-Phase des Wand-Werkzeugs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallPhase {
    /// Kein Startpunkt gesetzt
    Idle,
    /// Startpunkt fixiert, Vorschau folgt dem Zeiger
    Anchored(Vec2),
}

/// Wand-Werkzeug
pub struct WallTool {
    phase: WallPhase,
    /// Zuletzt angezeigte (aufgelöste) Zeigerposition
    cursor: Option<Vec2>,
    guides: SnapGuides,
}

impl WallTool {
    /// Erstellt ein neues Wand-Werkzeug im Zustand `Idle`.
    pub fn new() -> Self {
        Self {
            phase: WallPhase::Idle,
            cursor: None,
            guides: SnapGuides::default(),
        }
    }

    /// Aktuelle Klick-Phase.
    pub fn phase(&self) -> WallPhase {
        self.phase
    }

    /// Löst eine rohe Zeigerposition auf (Achsen-Snap, dann Raster-Snap).
    fn resolve(&self, raw: Vec2, options: &EditorOptions) -> (Vec2, SnapGuides) {
        match self.phase {
            WallPhase::Idle => (
                snap_to_grid(raw, options.grid_size),
                SnapGuides::default(),
            ),
            WallPhase::Anchored(anchor) => {
                let axis = snap_to_axis_detailed(raw, anchor, options.axis_snap_threshold);
                let guides = SnapGuides {
                    vertical_x: axis.vertical.then_some(anchor.x),
                    horizontal_y: axis.horizontal.then_some(anchor.y),
                };
                (snap_to_grid(axis.point, options.grid_size), guides)
            }
        }
    }
}

impl Default for WallTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementTool for WallTool {
    fn name(&self) -> &str {
        "Wand"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            WallPhase::Idle => "Startpunkt wählen",
            WallPhase::Anchored(_) => "Endpunkt wählen",
        }
    }

    fn on_pointer_move(&mut self, pos: Vec2, _scene: &Scene, options: &EditorOptions) {
        let (point, guides) = self.resolve(pos, options);
        self.cursor = Some(point);
        self.guides = guides;
    }

    fn on_click(
        &mut self,
        pos: Vec2,
        _scene: &Scene,
        options: &EditorOptions,
    ) -> Option<ToolResult> {
        // Committet wird der zuletzt angezeigte Vorschaupunkt
        let point = match self.cursor {
            Some(p) => p,
            None => self.resolve(pos, options).0,
        };

        match self.phase {
            WallPhase::Idle => {
                self.phase = WallPhase::Anchored(point);
                self.cursor = Some(point);
                self.guides = SnapGuides::default();
                log::debug!("Wand-Anker gesetzt: ({:.1}, {:.1})", point.x, point.y);
                None
            }
            WallPhase::Anchored(start) => {
                if start == point {
                    log::debug!("Wand mit Länge 0 verworfen");
                    return None;
                }
                self.phase = WallPhase::Idle;
                self.guides = SnapGuides::default();
                Some(ToolResult {
                    object: ObjectKind::Wall(Wall::new(
                        start,
                        point,
                        options.wall_height,
                        options.wall_thickness,
                    )),
                })
            }
        }
    }

    fn preview(&self) -> ToolPreview {
        ToolPreview {
            anchor: match self.phase {
                WallPhase::Anchored(anchor) => Some(anchor),
                WallPhase::Idle => None,
            },
            cursor: self.cursor,
            guides: self.guides,
            target_wall: None,
        }
    }

    fn reset(&mut self) {
        self.phase = WallPhase::Idle;
        self.cursor = None;
        self.guides = SnapGuides::default();
    }

    fn has_pending_input(&self) -> bool {
        matches!(self.phase, WallPhase::Anchored(_))
    }
}
