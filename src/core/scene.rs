//! Die Szene: geordnete Sequenz aller Szenenobjekte.
//!
//! Einfügereihenfolge = Render-/Z-Reihenfolge und Hit-Test-Reihenfolge.
//! Mutiert wird ausschließlich über `insert`, `patch` und `remove`;
//! Undo/Redo tauscht die ganze Szene aus (siehe `app::history`).

use super::scene_object::{ObjectId, ObjectKind, ObjectPatch, OpeningRef, SceneObject, Wall};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Geordnete Menge von Szenenobjekten, indexiert nach ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    objects: IndexMap<ObjectId, SceneObject>,
}

/// Ergebnis eines Patch-Versuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Patch wurde übernommen
    Applied,
    /// ID nicht vorhanden (erlaubter No-Op)
    Missing,
    /// Patch hätte eine Invariante verletzt (z.B. Wand mit Länge 0)
    Rejected,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine Szene aus einer Objektliste. Doppelte IDs werden abgelehnt.
    pub fn from_objects(objects: Vec<SceneObject>) -> Result<Self, ObjectId> {
        let mut scene = Self::new();
        for object in objects {
            let id = object.id;
            if scene.objects.insert(id, object).is_some() {
                return Err(id);
            }
        }
        Ok(scene)
    }

    /// Anzahl der Objekte.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Gibt `true` zurück, wenn die Szene leer ist.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Sucht ein Objekt per ID.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Prüft, ob eine ID existiert.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Iteriert in Sequenzreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> + '_ {
        self.objects.values()
    }

    /// Alle Wände in Sequenzreihenfolge.
    pub fn walls(&self) -> impl Iterator<Item = (ObjectId, &Wall)> + '_ {
        self.iter().filter_map(|obj| obj.as_wall().map(|w| (obj.id, w)))
    }

    /// Wand per ID (schwache Referenz: `None` bei fehlender oder falsch typisierter ID).
    pub fn wall(&self, id: ObjectId) -> Option<&Wall> {
        self.get(id).and_then(SceneObject::as_wall)
    }

    /// Alle Türen/Fenster, deren `wall_id` auf die gegebene Wand zeigt.
    pub fn openings_for(
        &self,
        wall_id: ObjectId,
    ) -> impl Iterator<Item = (ObjectId, OpeningRef<'_>)> + '_ {
        self.iter().filter_map(move |obj| {
            obj.kind
                .as_opening()
                .filter(|o| o.wall_id() == Some(wall_id))
                .map(|o| (obj.id, o))
        })
    }

    /// Größte vergebene ID (für den ID-Allokator nach dem Laden).
    pub fn max_id(&self) -> Option<ObjectId> {
        self.objects.keys().copied().max()
    }

    /// Objekte als Slice-ähnliche Liste (für Persistenz).
    pub fn to_objects(&self) -> Vec<SceneObject> {
        self.objects.values().cloned().collect()
    }

    /// Hängt ein Objekt mit bereits vergebener ID ans Ende an.
    ///
    /// Öffnungen mit auflösbarer Wand bekommen ihre Position abgeleitet.
    /// Ungültige Wände (Start == Ende) und bereits vergebene IDs werden
    /// abgelehnt (`false`); ein bestehendes Objekt wird nie überschrieben.
    pub fn insert(&mut self, id: ObjectId, mut kind: ObjectKind) -> bool {
        if self.objects.contains_key(&id) {
            return false;
        }
        if let ObjectKind::Wall(wall) = &kind {
            if !wall.is_valid() {
                return false;
            }
        }
        self.refresh_opening(&mut kind);
        self.objects.insert(id, SceneObject::new(id, kind));
        true
    }

    /// Prüft, ob ein Patch übernommen werden würde, ohne zu mutieren.
    pub fn check_patch(&self, id: ObjectId, patch: &ObjectPatch) -> PatchOutcome {
        let Some(object) = self.objects.get(&id) else {
            return PatchOutcome::Missing;
        };
        if let ObjectKind::Wall(wall) = &object.kind {
            let start = patch.start.unwrap_or(wall.start);
            let end = patch.end.unwrap_or(wall.end);
            if start == end {
                return PatchOutcome::Rejected;
            }
        }
        PatchOutcome::Applied
    }

    /// Übernimmt die Felder eines Patches in das Objekt.
    ///
    /// Fehlende IDs sind ein erlaubter No-Op. Ändert sich die Geometrie einer
    /// Wand, werden die Positionen aller daran hängenden Öffnungen nachgezogen.
    pub fn patch(&mut self, id: ObjectId, patch: &ObjectPatch) -> PatchOutcome {
        let outcome = self.check_patch(id, patch);
        if outcome != PatchOutcome::Applied {
            return outcome;
        }

        let Some(mut kind) = self.objects.get(&id).map(|obj| obj.kind.clone()) else {
            return PatchOutcome::Missing;
        };
        patch.apply_to(&mut kind);
        self.refresh_opening(&mut kind);
        let is_wall = matches!(kind, ObjectKind::Wall(_));
        if let Some(object) = self.objects.get_mut(&id) {
            object.kind = kind;
        }

        if is_wall && patch.touches_wall_geometry() {
            self.refresh_openings_of(id);
        }
        PatchOutcome::Applied
    }

    /// Entfernt ein Objekt (Reihenfolge der übrigen bleibt erhalten).
    ///
    /// Öffnungen einer entfernten Wand bleiben bestehen (keine Kaskade).
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.shift_remove(&id)
    }

    fn refresh_opening(&self, kind: &mut ObjectKind) {
        let Some(wall_id) = kind.as_opening().and_then(|o| o.wall_id()) else {
            return;
        };
        if let Some(wall) = self.wall(wall_id) {
            kind.refresh_opening_position(wall);
        }
    }

    fn refresh_openings_of(&mut self, wall_id: ObjectId) {
        let Some(wall) = self.wall(wall_id).cloned() else {
            return;
        };
        for object in self.objects.values_mut() {
            let attached = object
                .kind
                .as_opening()
                .is_some_and(|o| o.wall_id() == Some(wall_id));
            if attached {
                object.kind.refresh_opening_position(&wall);
            }
        }
    }
}

impl Serialize for Scene {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.objects.values())
    }
}

impl<'de> Deserialize<'de> for Scene {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let objects = Vec::<SceneObject>::deserialize(deserializer)?;
        Scene::from_objects(objects)
            .map_err(|id| serde::de::Error::custom(format!("doppelte Objekt-ID {id}")))
    }
}
