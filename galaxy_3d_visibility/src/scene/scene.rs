/// Scene — the objects and lights a frame is built from.
///
/// Objects live in a SlotMap for O(1) insert/remove with stable keys.
/// Lights are kept in insertion order; shadow views visit them that way.

use slotmap::SlotMap;
use glam::Mat4;
use crate::culling::BoundingBox;
use super::light::{Light, LightId};
use super::object::{ObjectKey, SceneObject};

#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== OBJECTS =====

    pub fn add_object(&mut self, object: SceneObject) -> ObjectKey {
        self.objects.insert(object)
    }

    pub fn remove_object(&mut self, key: ObjectKey) -> Option<SceneObject> {
        self.objects.remove(key)
    }

    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Set the world matrix of an object. Returns false if key is invalid.
    pub fn set_world_matrix(&mut self, key: ObjectKey, matrix: Mat4) -> bool {
        match self.objects.get_mut(key) {
            Some(object) => {
                object.set_world_matrix(matrix);
                true
            }
            None => false,
        }
    }

    pub fn objects(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    pub fn object_keys(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.objects.keys()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // ===== LIGHTS =====

    pub fn add_light(&mut self, light: Light) -> LightId {
        self.lights.push(light);
        LightId(self.lights.len() - 1)
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0)
    }

    pub fn lights(&self) -> impl Iterator<Item = (LightId, &Light)> {
        self.lights.iter().enumerate().map(|(i, light)| (LightId(i), light))
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    // ===== BOUNDS =====

    /// Union of the world boxes of all renderable objects with known extent.
    pub fn world_bounding_box(&self) -> BoundingBox {
        self.objects
            .values()
            .filter(|o| o.is_renderable() && !o.bounding_box().is_empty())
            .fold(BoundingBox::EMPTY, |acc, o| acc.union(&o.world_bounding_box()))
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
