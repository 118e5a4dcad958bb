//! Render-Szenen als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer
//! (2D-Zeichenfläche bzw. 3D-Szene) sie konsumiert. Beide Verträge sind
//! reine Daten und per serde serialisierbar.

use crate::core::{Furniture, ObjectId, OpeningKind, Wall, WallGeometry};
use glam::{Vec2, Vec3};
use serde::Serialize;

/// Aktive Achsen-Führungslinien des Wand-Werkzeugs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SnapGuides {
    /// Vertikale Führung bei dieser x-Koordinate
    pub vertical_x: Option<f32>,
    /// Horizontale Führung bei dieser y-Koordinate
    pub horizontal_y: Option<f32>,
}

impl SnapGuides {
    /// Gibt `true` zurück, wenn keine Führung aktiv ist.
    pub fn is_empty(&self) -> bool {
        self.vertical_x.is_none() && self.horizontal_y.is_none()
    }
}

/// Wand-Vorschau vom Anker bis zur aufgelösten Zeigerposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallPreview {
    /// Fixierter Startpunkt
    pub start: Vec2,
    /// Aktuelle (gesnappte) Zeigerposition
    pub end: Vec2,
}

/// Wand in der 2D-Darstellung.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderWall2D {
    /// ID der Wand
    pub id: ObjectId,
    /// Wanddaten
    pub wall: Wall,
    /// Wand ist aktuell selektiert
    pub selected: bool,
}

/// Read-only Daten für einen Frame der 2D-Zeichenfläche.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderScene2D {
    /// Rastergröße für das Hintergrundraster
    pub grid_size: f32,
    /// Alle Wände in Szenenreihenfolge
    pub walls: Vec<RenderWall2D>,
    /// Gestrichelte Vorschau der Wand im Aufbau
    pub wall_preview: Option<WallPreview>,
    /// Achsen-Führungslinien
    pub snap_guides: SnapGuides,
    /// Aufgelöste Zeigerposition des aktiven Werkzeugs
    pub pointer: Option<Vec2>,
    /// Hervorgehobene Ziel-Wand (Tür-/Fenster-Werkzeug)
    pub target_wall: Option<ObjectId>,
    /// Aktuell selektiertes Objekt
    pub selected_id: Option<ObjectId>,
    /// Statustext des aktiven Werkzeugs (z.B. "Endpunkt wählen")
    pub tool_status: Option<String>,
}

/// Öffnung ohne auflösbare Wand (verwaist, wird nicht gerendert).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanOpening {
    /// ID der Tür bzw. des Fensters
    pub id: ObjectId,
    /// Tür oder Fenster
    pub kind: OpeningKind,
    /// Zuletzt bekannte Position
    pub position: Vec3,
    /// Breite
    pub width: f32,
    /// Höhe
    pub height: f32,
}

/// Möbelstück in der 3D-Szene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFurniture {
    /// ID des Möbelstücks
    pub id: ObjectId,
    /// Möbeldaten (Modell wird extern aufgelöst)
    pub furniture: Furniture,
}

/// Read-only Daten für einen Frame der 3D-Szene.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderScene3D {
    /// Eine Geometrie pro Wand, inkl. Öffnungs-Ausschnitten
    pub walls: Vec<WallGeometry>,
    /// Möbel unverändert durchgereicht
    pub furniture: Vec<RenderFurniture>,
    /// Öffnungen, deren Wand fehlt oder nicht referenziert ist
    pub orphan_openings: Vec<OrphanOpening>,
}

impl RenderScene3D {
    /// Anzahl der Szenenobjekte, die dieser Frame darstellt.
    pub fn object_count(&self) -> usize {
        self.walls.len()
            + self.walls.iter().map(|w| w.cuts.len()).sum::<usize>()
            + self.furniture.len()
            + self.orphan_openings.len()
    }

    /// Ersetzt eine Wandgeometrie durch ihren massiven Fallback.
    ///
    /// Wird genutzt, wenn der Renderer das Ausschneiden einer Wand ablehnt.
    pub fn degrade_wall(&mut self, wall_id: ObjectId) -> bool {
        match self.walls.iter_mut().find(|g| g.wall_id == wall_id) {
            Some(geometry) => {
                *geometry = geometry.solid_fallback();
                true
            }
            None => false,
        }
    }
}
