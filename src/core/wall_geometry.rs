//! Ableitung der 3D-Wandgeometrie inkl. Öffnungs-Ausschnitten.
//!
//! Liefert nur Parameter: Die boolesche Subtraktion übernimmt der
//! Render-Kollaborateur. `SolidFallback` ist der degradierte Modus ohne Ausschnitte.

use super::scene::Scene;
use super::scene_object::{ObjectId, OpeningRef, Wall};
use glam::{Vec2, Vec3};
use serde::Serialize;

/// Tiefenfaktor des Schneidkörpers relativ zur Wandstärke.
pub const CUT_DEPTH_FACTOR: f32 = 1.2;

/// Art der Öffnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    /// Tür (Unterkante am Boden)
    Door,
    /// Fenster (Unterkante auf `elevation`)
    Window,
}

/// Ausschnitt einer Öffnung im lokalen Koordinatensystem der Wand.
///
/// Lokale x-Achse = Wandachse (Ursprung in der Wandmitte), y = vertikal ab Boden.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningCut {
    /// ID der Tür bzw. des Fensters
    pub opening_id: ObjectId,
    /// Tür oder Fenster
    pub kind: OpeningKind,
    /// Mittelpunkt entlang der Wandachse: `position_on_wall * length - length / 2`
    pub offset_along_axis: f32,
    /// Ausdehnung entlang der Wandachse
    pub width: f32,
    /// Vertikale Ausdehnung
    pub height: f32,
    /// Unterkante über dem Boden
    pub elevation: f32,
    /// Vertikaler Mittelpunkt (`elevation + height / 2`)
    pub center_height: f32,
    /// Tiefe des Schneidkörpers quer zur Wand
    pub depth: f32,
}

/// Darstellungsmodus der Wand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WallRenderMode {
    /// Zielverhalten: Wandvolumen mit ausgeschnittenen Öffnungen
    WithOpenings,
    /// Degradiert: massive Wand, Öffnungen werden ignoriert
    SolidFallback,
}

/// Render-Beschreibung einer Wand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallGeometry {
    /// ID der Wand
    pub wall_id: ObjectId,
    /// Mittelpunkt der Mittellinie in der Zeichenebene
    pub center: Vec2,
    /// Länge der Mittellinie (euklidische Norm von `end - start`)
    pub length: f32,
    /// Vorzeichenbehafteter Winkel von `end - start` (atan2, Bogenmaß)
    pub angle: f32,
    /// Wandhöhe
    pub height: f32,
    /// Wandstärke
    pub thickness: f32,
    /// Ausschnitte in Sequenzreihenfolge der Öffnungen
    pub cuts: Vec<OpeningCut>,
    /// Ziel- oder Fallback-Modus
    pub render_mode: WallRenderMode,
}

impl WallGeometry {
    /// Mittelpunkt des Wandvolumens in 3D (Zeichenebene y → 3D z).
    pub fn world_center(&self) -> Vec3 {
        Vec3::new(self.center.x, self.height / 2.0, self.center.y)
    }

    /// Rotation um die vertikale Achse für den Render-Kollaborateur.
    pub fn rotation_y(&self) -> f32 {
        -self.angle
    }

    /// Degradierte Variante: massive Wand ohne Ausschnitte.
    pub fn solid_fallback(&self) -> WallGeometry {
        WallGeometry {
            cuts: Vec::new(),
            render_mode: WallRenderMode::SolidFallback,
            ..self.clone()
        }
    }

    /// Gibt `true` zurück, wenn es sich um den Fallback-Modus handelt.
    pub fn is_fallback(&self) -> bool {
        self.render_mode == WallRenderMode::SolidFallback
    }
}

/// Berechnet den Ausschnitt einer einzelnen Öffnung.
pub fn derive_cut(opening_id: ObjectId, opening: OpeningRef<'_>, wall: &Wall) -> OpeningCut {
    let length = wall.length();
    let kind = match opening {
        OpeningRef::Door(_) => OpeningKind::Door,
        OpeningRef::Window(_) => OpeningKind::Window,
    };
    let elevation = opening.elevation();
    let height = opening.height();
    OpeningCut {
        opening_id,
        kind,
        offset_along_axis: opening.position_on_wall() * length - length / 2.0,
        width: opening.width(),
        height,
        elevation,
        center_height: elevation + height / 2.0,
        depth: wall.thickness * CUT_DEPTH_FACTOR,
    }
}

/// Leitet die Render-Beschreibung einer Wand aus ihren Öffnungen ab.
///
/// Rein funktional; muss bei jeder Änderung der Wand oder einer Öffnung neu laufen.
pub fn derive_wall_geometry<'a>(
    wall_id: ObjectId,
    wall: &Wall,
    openings: impl IntoIterator<Item = (ObjectId, OpeningRef<'a>)>,
) -> WallGeometry {
    let dir = wall.end - wall.start;
    WallGeometry {
        wall_id,
        center: (wall.start + wall.end) / 2.0,
        length: dir.length(),
        angle: dir.y.atan2(dir.x),
        height: wall.height,
        thickness: wall.thickness,
        cuts: openings
            .into_iter()
            .map(|(id, opening)| derive_cut(id, opening, wall))
            .collect(),
        render_mode: WallRenderMode::WithOpenings,
    }
}

/// Leitet die Geometrie einer Wand der Szene inkl. aller daran hängenden Öffnungen ab.
pub fn derive_for_scene_wall(scene: &Scene, wall_id: ObjectId) -> Option<WallGeometry> {
    let wall = scene.wall(wall_id)?;
    Some(derive_wall_geometry(
        wall_id,
        wall,
        scene.openings_for(wall_id),
    ))
}
