//! Architektur-Objekte der Szene: Wände, Türen, Fenster und Möbel.
//!
//! `SceneObject` trägt die unveränderliche ID, `ObjectKind` ist die
//! geschlossene Summe aller Objekttypen (serde-Tag `type`).

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Eindeutige, nie wiederverwendete Objekt-ID.
pub type ObjectId = u64;

/// Wand zwischen zwei Punkten der Zeichenebene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Startpunkt (Zeichenebene x/y, entspricht 3D x/z)
    pub start: Vec2,
    /// Endpunkt
    pub end: Vec2,
    /// Wandhöhe
    pub height: f32,
    /// Wandstärke
    pub thickness: f32,
}

impl Wall {
    /// Erstellt eine Wand.
    pub fn new(start: Vec2, end: Vec2, height: f32, thickness: f32) -> Self {
        Self {
            start,
            end,
            height,
            thickness,
        }
    }

    /// Länge der Mittellinie.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Eine Wand ist gültig, solange Start und Ende verschieden sind.
    pub fn is_valid(&self) -> bool {
        self.start != self.end
    }

    /// Punkt auf der Mittellinie bei normiertem Parameter `t` (nicht geklemmt).
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + (self.end - self.start) * t
    }
}

/// Tür, die über eine schwache Referenz an einer Wand hängt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Abgeleitete 3D-Position (wird aus Wand + `position_on_wall` berechnet)
    pub position: Vec3,
    /// Breite entlang der Wand
    pub width: f32,
    /// Höhe ab Boden
    pub height: f32,
    /// Schwache Referenz auf die tragende Wand
    pub wall_id: Option<ObjectId>,
    /// Normierte Position entlang der Wand (0 = Start, 1 = Ende)
    pub position_on_wall: f32,
}

/// Fenster mit Brüstungshöhe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Abgeleitete 3D-Position
    pub position: Vec3,
    /// Breite entlang der Wand
    pub width: f32,
    /// Höhe der Öffnung
    pub height: f32,
    /// Unterkante über dem Boden
    pub elevation: f32,
    /// Schwache Referenz auf die tragende Wand
    pub wall_id: Option<ObjectId>,
    /// Normierte Position entlang der Wand
    pub position_on_wall: f32,
}

/// Möbelstück; das Modell wird extern aufgelöst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    /// 3D-Position
    pub position: Vec3,
    /// Euler-Rotation
    pub rotation: Vec3,
    /// Skalierung pro Achse
    pub scale: Vec3,
    /// Opaker Modell-Bezeichner
    pub model: String,
}

/// Typ-Diskriminante eines Szenenobjekts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Wand
    Wall,
    /// Tür
    Door,
    /// Fenster
    Window,
    /// Möbel
    Furniture,
}

/// Objekt ohne ID als Eingabe für `insert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    /// Wand
    Wall(Wall),
    /// Tür
    Door(Door),
    /// Fenster
    Window(Window),
    /// Möbel
    Furniture(Furniture),
}

impl ObjectKind {
    /// Liefert die Typ-Diskriminante.
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectKind::Wall(_) => ObjectType::Wall,
            ObjectKind::Door(_) => ObjectType::Door,
            ObjectKind::Window(_) => ObjectType::Window,
            ObjectKind::Furniture(_) => ObjectType::Furniture,
        }
    }

    /// Gibt die Öffnungs-Sicht zurück, falls es sich um Tür oder Fenster handelt.
    pub fn as_opening(&self) -> Option<OpeningRef<'_>> {
        match self {
            ObjectKind::Door(door) => Some(OpeningRef::Door(door)),
            ObjectKind::Window(window) => Some(OpeningRef::Window(window)),
            ObjectKind::Wall(_) | ObjectKind::Furniture(_) => None,
        }
    }

    /// Berechnet die abgeleitete Position einer Öffnung neu.
    ///
    /// Gibt `true` zurück, wenn das Objekt eine Öffnung ist und die Position gesetzt wurde.
    pub(crate) fn refresh_opening_position(&mut self, wall: &Wall) -> bool {
        match self {
            ObjectKind::Door(door) => {
                door.position = opening_position(wall, door.position_on_wall, 0.0);
                true
            }
            ObjectKind::Window(window) => {
                window.position =
                    opening_position(wall, window.position_on_wall, window.elevation);
                true
            }
            ObjectKind::Wall(_) | ObjectKind::Furniture(_) => false,
        }
    }
}

/// Berechnet die 3D-Position einer Öffnung (Zeichenebene y → 3D z).
pub fn opening_position(wall: &Wall, position_on_wall: f32, elevation: f32) -> Vec3 {
    let p = wall.point_at(position_on_wall);
    Vec3::new(p.x, elevation, p.y)
}

/// Read-only Sicht auf Tür oder Fenster.
#[derive(Debug, Clone, Copy)]
pub enum OpeningRef<'a> {
    /// Tür
    Door(&'a Door),
    /// Fenster
    Window(&'a Window),
}

impl OpeningRef<'_> {
    /// Referenzierte Wand.
    pub fn wall_id(&self) -> Option<ObjectId> {
        match self {
            OpeningRef::Door(d) => d.wall_id,
            OpeningRef::Window(w) => w.wall_id,
        }
    }

    /// Normierte Position entlang der Wand.
    pub fn position_on_wall(&self) -> f32 {
        match self {
            OpeningRef::Door(d) => d.position_on_wall,
            OpeningRef::Window(w) => w.position_on_wall,
        }
    }

    /// Breite entlang der Wand.
    pub fn width(&self) -> f32 {
        match self {
            OpeningRef::Door(d) => d.width,
            OpeningRef::Window(w) => w.width,
        }
    }

    /// Höhe der Öffnung.
    pub fn height(&self) -> f32 {
        match self {
            OpeningRef::Door(d) => d.height,
            OpeningRef::Window(w) => w.height,
        }
    }

    /// Unterkante über dem Boden (Türen: 0).
    pub fn elevation(&self) -> f32 {
        match self {
            OpeningRef::Door(_) => 0.0,
            OpeningRef::Window(w) => w.elevation,
        }
    }
}

/// Szenenobjekt mit unveränderlicher ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Eindeutige ID (bei Erstellung vergeben)
    pub id: ObjectId,
    /// Typ und Nutzdaten
    #[serde(flatten)]
    pub kind: ObjectKind,
}

impl SceneObject {
    /// Erstellt ein Objekt mit vorgegebener ID.
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self { id, kind }
    }

    /// Liefert die Typ-Diskriminante.
    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    /// Gibt die Wand zurück, falls das Objekt eine ist.
    pub fn as_wall(&self) -> Option<&Wall> {
        match &self.kind {
            ObjectKind::Wall(wall) => Some(wall),
            _ => None,
        }
    }
}

/// Teil-Update für `patch`. Nur gesetzte Felder werden übernommen,
/// Felder, die der Objekttyp nicht kennt, werden ignoriert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectPatch {
    /// Wand: Startpunkt
    pub start: Option<Vec2>,
    /// Wand: Endpunkt
    pub end: Option<Vec2>,
    /// Wand/Tür/Fenster: Höhe
    pub height: Option<f32>,
    /// Wand: Stärke
    pub thickness: Option<f32>,
    /// Möbel: Position (bei Öffnungen abgeleitet und daher ignoriert)
    pub position: Option<Vec3>,
    /// Tür/Fenster: Breite
    pub width: Option<f32>,
    /// Fenster: Brüstungshöhe
    pub elevation: Option<f32>,
    /// Tür/Fenster: Wandreferenz (`Some(None)` löst die Referenz)
    pub wall_id: Option<Option<ObjectId>>,
    /// Tür/Fenster: normierte Position entlang der Wand
    pub position_on_wall: Option<f32>,
    /// Möbel: Rotation
    pub rotation: Option<Vec3>,
    /// Möbel: Skalierung
    pub scale: Option<Vec3>,
    /// Möbel: Modell-Bezeichner
    pub model: Option<String>,
}

impl ObjectPatch {
    /// Übernimmt alle gesetzten, für den Objekttyp relevanten Felder.
    pub fn apply_to(&self, kind: &mut ObjectKind) {
        match kind {
            ObjectKind::Wall(wall) => {
                set(&mut wall.start, self.start);
                set(&mut wall.end, self.end);
                set(&mut wall.height, self.height);
                set(&mut wall.thickness, self.thickness);
            }
            ObjectKind::Door(door) => {
                set(&mut door.width, self.width);
                set(&mut door.height, self.height);
                set(&mut door.wall_id, self.wall_id);
                set(&mut door.position_on_wall, self.position_on_wall);
            }
            ObjectKind::Window(window) => {
                set(&mut window.width, self.width);
                set(&mut window.height, self.height);
                set(&mut window.elevation, self.elevation);
                set(&mut window.wall_id, self.wall_id);
                set(&mut window.position_on_wall, self.position_on_wall);
            }
            ObjectKind::Furniture(furniture) => {
                set(&mut furniture.position, self.position);
                set(&mut furniture.rotation, self.rotation);
                set(&mut furniture.scale, self.scale);
                if let Some(model) = &self.model {
                    furniture.model.clone_from(model);
                }
            }
        }
    }

    /// Betrifft der Patch die Geometrie einer Wand?
    pub fn touches_wall_geometry(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
