//! Scene data consumed by the visibility pipeline
//!
//! Objects, their meshes, lights, and the depth targets lights render into.

mod depth_target;
mod light;
mod mesh;
mod object;
mod scene;

pub use depth_target::{DepthTargetId, DepthTargetRegistry, DepthTargetTable};
pub use light::{CubemapFace, Light, LightId, LightKind, LightType};
pub use mesh::{BuiltinGeometry, MeshId, MeshKind, ObjectMesh};
pub use object::{ObjectKey, RenderFlags, SceneObject};
pub use scene::Scene;
