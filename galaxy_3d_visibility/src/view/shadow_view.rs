/// ShadowView — per-frame shadow-caster lists for every shadowing light.

use glam::Mat4;
use crate::scene::{CubemapFace, DepthTargetId, LightId, ObjectKey};
use super::render_list::{InstancedRenderList, MeshDrawData, RenderList};

/// Casters visible from a single-frustum light (spot or directional).
#[derive(Debug, Clone)]
pub struct LightShadowView {
    pub light: LightId,
    pub depth_target: DepthTargetId,
    pub view_projection: Mat4,
    /// All visible casters, in caster order
    pub casters: RenderList,
    /// Visible casters drawn individually
    pub individual: RenderList,
    /// Visible casters drawn instanced, by mesh
    pub instanced: InstancedRenderList,
}

impl LightShadowView {
    pub(crate) fn new(light: LightId, depth_target: DepthTargetId, view_projection: Mat4) -> Self {
        Self {
            light,
            depth_target,
            view_projection,
            casters: RenderList::new(),
            individual: RenderList::new(),
            instanced: InstancedRenderList::new(),
        }
    }
}

/// One cubemap face of a point light
#[derive(Debug, Clone, Default)]
pub struct CubeFaceView {
    pub view_projection: Mat4,
    /// Casters whose aggregate box is visible from this face
    pub casters: RenderList,
    /// Visible meshes of the casters, tested per mesh box
    pub mesh_draw_data: MeshDrawData,
}

/// Casters visible from each face of a point light's cubemap.
#[derive(Debug, Clone)]
pub struct PointShadowView {
    pub light: LightId,
    pub depth_target: DepthTargetId,
    /// Indexed by `CubemapFace::index()`
    pub faces: [CubeFaceView; CubemapFace::COUNT],
}

impl PointShadowView {
    pub fn face(&self, face: CubemapFace) -> &CubeFaceView {
        &self.faces[face.index()]
    }
}

/// Shadow views of every active shadowing light, in scene light order.
#[derive(Debug, Clone, Default)]
pub struct ShadowView {
    pub spots: Vec<LightShadowView>,
    pub points: Vec<PointShadowView>,
    pub directional: Option<LightShadowView>,
}

impl ShadowView {
    pub fn spot(&self, light: LightId) -> Option<&LightShadowView> {
        self.spots.iter().find(|v| v.light == light)
    }

    pub fn point(&self, light: LightId) -> Option<&PointShadowView> {
        self.points.iter().find(|v| v.light == light)
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty() && self.points.is_empty() && self.directional.is_none()
    }

    /// Whether `object` is drawn into any shadow map this frame
    pub fn casts_anywhere(&self, object: ObjectKey) -> bool {
        self.spots.iter().chain(self.directional.iter()).any(|v| v.casters.contains(object))
            || self.points.iter().any(|p| p.faces.iter().any(|f| f.casters.contains(object)))
    }
}
