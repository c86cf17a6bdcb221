/// LodManager — tracks the active LOD level of each (object, mesh) pair.
///
/// Levels are refreshed once per frame from the viewer distance. Only
/// registered pairs are tracked; everything else reads as level 0.

use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::scene::{MeshId, ObjectKey, Scene};
use crate::view::FrameContext;
use crate::{engine_debug, engine_warn};
use super::settings::LodSettings;

/// Tracked LOD state of one (object, mesh) pair
#[derive(Debug, Clone, PartialEq)]
pub struct LodEntry {
    /// Current level, always a valid index into the mesh's levels
    pub active_lod: usize,
    pub settings: LodSettings,
}

/// Pending level change, committed after the distance pass
#[derive(Debug, Clone, Copy)]
struct LodUpdate {
    object: ObjectKey,
    mesh: MeshId,
    new_lod: usize,
}

#[derive(Debug, Default)]
pub struct LodManager {
    entries: FxHashMap<ObjectKey, FxHashMap<MeshId, LodEntry>>,
    /// Registration order, so updates visit objects deterministically
    objects: Vec<ObjectKey>,
    viewer: Option<Vec3>,
    update_list: Vec<LodUpdate>,
}

impl LodManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset, then register every object whose last mesh is a built-in with
    /// default thresholds, and compute initial levels from `viewer`.
    pub fn initialize(&mut self, scene: &Scene, viewer: Vec3) {
        self.reset();
        self.viewer = Some(viewer);

        for (key, object) in scene.objects() {
            let Some(last_mesh) = object.meshes().last() else {
                engine_warn!("galaxy3d::LodManager", "Object {:?} has no meshes, not tracked for LOD", key);
                continue;
            };
            let Some(settings) = last_mesh.id.builtin().and_then(LodSettings::builtin) else {
                continue;
            };
            self.register_mesh_lod(key, last_mesh.id, settings);
        }

        engine_debug!("galaxy3d::LodManager", "Tracking LOD for {} objects", self.objects.len());
        self.update(scene);
    }

    /// Drop all registrations and the viewer
    pub fn reset(&mut self) {
        self.entries.clear();
        self.objects.clear();
        self.viewer = None;
        self.update_list.clear();
    }

    /// Start tracking `mesh` of `object` at level 0. Re-registering replaces
    /// the thresholds and resets the level.
    pub fn register_mesh_lod(&mut self, object: ObjectKey, mesh: MeshId, settings: LodSettings) {
        let meshes = self.entries.entry(object).or_insert_with(|| {
            self.objects.push(object);
            FxHashMap::default()
        });
        meshes.insert(mesh, LodEntry { active_lod: 0, settings });
    }

    /// Stop tracking every mesh of `object`
    pub fn unregister_object(&mut self, object: ObjectKey) -> bool {
        if self.entries.remove(&object).is_some() {
            self.objects.retain(|k| *k != object);
            true
        } else {
            false
        }
    }

    pub fn set_viewer(&mut self, position: Vec3) {
        self.viewer = Some(position);
    }

    pub fn viewer(&self) -> Option<Vec3> {
        self.viewer
    }

    pub fn entry(&self, object: ObjectKey, mesh: MeshId) -> Option<&LodEntry> {
        self.entries.get(&object).and_then(|m| m.get(&mesh))
    }

    /// Number of tracked (object, mesh) pairs
    pub fn tracked_count(&self) -> usize {
        self.entries.values().map(|m| m.len()).sum()
    }

    /// Recompute levels from the viewer distance. Returns the number of
    /// levels that changed.
    ///
    /// Levels beyond a mesh's `lod_count` are clamped to its last level.
    /// Objects no longer in `scene` keep their previous level.
    pub fn update(&mut self, scene: &Scene) -> usize {
        let Some(viewer) = self.viewer else {
            engine_warn!("galaxy3d::LodManager", "update() called without a viewer position");
            return 0;
        };

        self.update_list.clear();
        for key in &self.objects {
            let Some(object) = scene.object(*key) else {
                continue;
            };
            let Some(meshes) = self.entries.get(key) else {
                continue;
            };
            let square_distance = object.position().distance_squared(viewer);

            for (mesh_id, entry) in meshes {
                let level = entry.settings.level_for_square_distance(square_distance);
                let max_level = object.mesh(*mesh_id).map_or(0, |m| m.lod_count.saturating_sub(1));
                let new_lod = level.min(max_level);
                if new_lod != entry.active_lod {
                    self.update_list.push(LodUpdate { object: *key, mesh: *mesh_id, new_lod });
                }
            }
        }

        for update in &self.update_list {
            if let Some(entry) = self.entries.get_mut(&update.object).and_then(|m| m.get_mut(&update.mesh)) {
                entry.active_lod = update.new_lod;
            }
        }

        self.update_list.len()
    }

    /// Level to draw `mesh` of `object` at this frame.
    ///
    /// A forced level in the frame settings overrides tracking. Untracked
    /// pairs report a warning and read as 0.
    pub fn lod_value(&self, object: ObjectKey, mesh: MeshId, ctx: &FrameContext) -> usize {
        if let Some(forced) = ctx.forced_lod_level() {
            return forced;
        }

        match self.entry(object, mesh) {
            Some(entry) => entry.active_lod,
            None => {
                engine_warn!(
                    "galaxy3d::LodManager",
                    "No LOD entry for mesh {:?} of object {:?}", mesh, object
                );
                0
            }
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
