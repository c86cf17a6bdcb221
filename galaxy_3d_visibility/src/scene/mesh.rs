/// Mesh identity and per-object mesh entries.
///
/// Mesh ids below `BuiltinGeometry::COUNT` name engine-provided geometry;
/// every other id is a custom (loaded) mesh.

use crate::culling::BoundingBox;
use crate::error::{Error, Result};
use crate::lod::LodSettings;

// ===== BUILT-IN GEOMETRY =====

/// Engine-provided primitive meshes, in id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinGeometry {
    Triangle,
    Quad,
    Cube,
    Cylinder,
    Sphere,
    Grid,
    Bone,
    Cone,
}

impl BuiltinGeometry {
    /// Number of built-in meshes (first custom mesh id)
    pub const COUNT: u32 = 8;

    pub const ALL: [BuiltinGeometry; Self::COUNT as usize] = [
        BuiltinGeometry::Triangle,
        BuiltinGeometry::Quad,
        BuiltinGeometry::Cube,
        BuiltinGeometry::Cylinder,
        BuiltinGeometry::Sphere,
        BuiltinGeometry::Grid,
        BuiltinGeometry::Bone,
        BuiltinGeometry::Cone,
    ];

    pub fn mesh_id(self) -> MeshId {
        MeshId(self as u32)
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Geometric class used to pick rasterizer culling
    pub fn kind(self) -> MeshKind {
        match self {
            BuiltinGeometry::Triangle | BuiltinGeometry::Quad | BuiltinGeometry::Grid => MeshKind::Flat,
            _ => MeshKind::Solid,
        }
    }
}

/// Flat (2-D, visible from both sides) or solid (closed) geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Flat,
    Solid,
}

// ===== MESH ID =====

/// Opaque mesh identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

impl MeshId {
    /// Id of the `index`-th custom mesh
    pub fn custom(index: u32) -> Self {
        MeshId(BuiltinGeometry::COUNT + index)
    }

    pub fn is_builtin(self) -> bool {
        self.0 < BuiltinGeometry::COUNT
    }

    pub fn builtin(self) -> Option<BuiltinGeometry> {
        BuiltinGeometry::from_index(self.0)
    }

    /// Custom meshes are treated as solid.
    pub fn kind(self) -> MeshKind {
        self.builtin().map_or(MeshKind::Solid, BuiltinGeometry::kind)
    }
}

impl From<BuiltinGeometry> for MeshId {
    fn from(geometry: BuiltinGeometry) -> Self {
        geometry.mesh_id()
    }
}

// ===== OBJECT MESH =====

/// One mesh of a scene object, with its local-space box and material traits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectMesh {
    pub id: MeshId,
    /// Local-space bounds of this mesh
    pub bounding_box: BoundingBox,
    /// Drawn in the alpha (transparent) pass
    pub transparent: bool,
    /// Material samples a texture (excluded from built-in instancing)
    pub textured: bool,
    /// Number of LOD levels the mesh provides (at least 1)
    pub lod_count: usize,
}

impl ObjectMesh {
    /// Built-in meshes with default LOD thresholds start with one level per
    /// threshold; everything else starts with a single level.
    pub fn new(id: impl Into<MeshId>, bounding_box: BoundingBox) -> Self {
        let id = id.into();
        let lod_count = id
            .builtin()
            .and_then(LodSettings::builtin)
            .map_or(1, |s| s.distance_thresholds().len().max(1));
        Self {
            id,
            bounding_box,
            transparent: false,
            textured: false,
            lod_count,
        }
    }

    pub fn with_transparency(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_texture(mut self, textured: bool) -> Self {
        self.textured = textured;
        self
    }

    /// Set the LOD level count. Zero is rejected.
    pub fn with_lod_count(mut self, lod_count: usize) -> Result<Self> {
        if lod_count == 0 {
            return Err(Error::InvalidLodSettings(format!(
                "mesh {:?} declares zero LOD levels", self.id
            )));
        }
        self.lod_count = lod_count;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
