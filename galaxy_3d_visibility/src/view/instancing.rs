/// Instancing policy — decides whether a visible object is drawn through an
/// instanced batch (grouped by mesh) or individually.

use crate::scene::{MeshId, SceneObject};

/// Routing decision for one visible object.
///
/// Returns the mesh to instance under, or `None` to draw the object
/// individually. The builders call this exactly once per visible object.
pub trait InstancingPolicy: Send + Sync {
    fn instance_mesh(&self, object: &SceneObject) -> Option<MeshId>;
}

/// Instance built-in meshes whose material has no texture.
///
/// Keyed by the object's primary (first) mesh. Textured materials need
/// per-object bindings and are drawn individually.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMeshInstancing;

impl InstancingPolicy for BuiltinMeshInstancing {
    fn instance_mesh(&self, object: &SceneObject) -> Option<MeshId> {
        object
            .primary_mesh()
            .filter(|mesh| mesh.id.is_builtin() && !mesh.textured)
            .map(|mesh| mesh.id)
    }
}

/// Shadow-caster variant: every built-in mesh is instanced, textures are
/// irrelevant to depth-only rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCasterInstancing;

impl InstancingPolicy for BuiltinCasterInstancing {
    fn instance_mesh(&self, object: &SceneObject) -> Option<MeshId> {
        object
            .primary_mesh()
            .filter(|mesh| mesh.id.is_builtin())
            .map(|mesh| mesh.id)
    }
}

/// Draw everything individually.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInstancing;

impl InstancingPolicy for NoInstancing {
    fn instance_mesh(&self, _object: &SceneObject) -> Option<MeshId> {
        None
    }
}
