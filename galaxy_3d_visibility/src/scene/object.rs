/// SceneObject — a renderable entity with a world transform and meshes.

use bitflags::bitflags;
use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use crate::culling::BoundingBox;
use super::mesh::{MeshId, ObjectMesh};

new_key_type! {
    /// Stable handle to a SceneObject
    pub struct ObjectKey;
}

bitflags! {
    /// Per-object render settings
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u32 {
        /// Object takes part in rendering at all
        const RENDER      = 1 << 0;
        /// Object is drawn into shadow maps
        const CAST_SHADOW = 1 << 1;
        /// Draw as wireframe
        const WIREFRAME   = 1 << 2;
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        RenderFlags::RENDER | RenderFlags::CAST_SHADOW
    }
}

/// A scene object.
///
/// The aggregate `bounding_box` is in local space and defaults to the union
/// of the mesh boxes; culling transforms it by `world_matrix`.
#[derive(Debug, Clone)]
pub struct SceneObject {
    world_matrix: Mat4,
    meshes: Vec<ObjectMesh>,
    bounding_box: BoundingBox,
    flags: RenderFlags,
    /// Mesh data is resident; objects still loading are skipped
    loaded: bool,
}

impl SceneObject {
    pub fn new(world_matrix: Mat4, meshes: Vec<ObjectMesh>) -> Self {
        let bounding_box = Self::union_of(&meshes);
        Self {
            world_matrix,
            meshes,
            bounding_box,
            flags: RenderFlags::default(),
            loaded: true,
        }
    }

    fn union_of(meshes: &[ObjectMesh]) -> BoundingBox {
        meshes.iter().fold(BoundingBox::EMPTY, |acc, m| acc.union(&m.bounding_box))
    }

    pub fn with_flags(mut self, flags: RenderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Override the aggregate local box
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = bounding_box;
        self
    }

    pub fn with_loaded(mut self, loaded: bool) -> Self {
        self.loaded = loaded;
        self
    }

    // ===== GETTERS =====

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Translation part of the world transform
    pub fn position(&self) -> Vec3 {
        self.world_matrix.col(3).truncate()
    }

    pub fn meshes(&self) -> &[ObjectMesh] {
        &self.meshes
    }

    pub fn mesh(&self, id: MeshId) -> Option<&ObjectMesh> {
        self.meshes.iter().find(|m| m.id == id)
    }

    /// First mesh; keys instancing and render-list sorting
    pub fn primary_mesh(&self) -> Option<&ObjectMesh> {
        self.meshes.first()
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Aggregate box in world space
    pub fn world_bounding_box(&self) -> BoundingBox {
        self.bounding_box.transformed(&self.world_matrix)
    }

    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_renderable(&self) -> bool {
        self.flags.contains(RenderFlags::RENDER)
    }

    pub fn casts_shadow(&self) -> bool {
        self.flags.contains(RenderFlags::RENDER | RenderFlags::CAST_SHADOW)
    }

    pub fn has_transparent_mesh(&self) -> bool {
        self.meshes.iter().any(|m| m.transparent)
    }

    // ===== SETTERS =====

    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    pub fn set_flags(&mut self, flags: RenderFlags) {
        self.flags = flags;
    }

    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    /// Replace the meshes and recompute the aggregate box
    pub fn set_meshes(&mut self, meshes: Vec<ObjectMesh>) {
        self.bounding_box = Self::union_of(&meshes);
        self.meshes = meshes;
    }
}
