/// SceneView — the main camera's per-frame view: transforms and the render
/// lists the geometry passes draw from. Rebuilt from scratch every frame.

use glam::{Mat4, Vec3};
use crate::camera::Camera;
use crate::scene::ObjectKey;
use super::render_list::{InstancedRenderList, RenderList};

#[derive(Debug, Clone, Default)]
pub struct SceneView {
    pub view: Mat4,
    pub view_inverse: Mat4,
    pub projection: Mat4,
    pub projection_inverse: Mat4,
    pub view_projection: Mat4,
    pub camera_position: Vec3,
    /// Light-space view-projection of the shadowing directional light, if any
    pub directional_light_view_projection: Option<Mat4>,

    /// Every renderable object with meshes, before culling
    pub opaque_list: RenderList,
    /// Objects with at least one transparent mesh (not culled)
    pub alpha_list: RenderList,
    /// Visible objects drawn individually
    pub culled_opaque_list: RenderList,
    /// Visible objects drawn through instanced batches, by mesh
    pub culled_instanced_lookup: InstancedRenderList,
}

impl SceneView {
    /// Empty view carrying the camera's transforms
    pub fn from_camera(camera: &Camera) -> Self {
        let view = *camera.view_matrix();
        let projection = *camera.projection_matrix();
        Self {
            view,
            view_inverse: view.inverse(),
            projection,
            projection_inverse: projection.inverse(),
            view_projection: projection * view,
            camera_position: camera.position(),
            ..Default::default()
        }
    }

    /// Whether `object` survived main-view culling (individually or instanced)
    pub fn is_visible(&self, object: ObjectKey) -> bool {
        self.culled_opaque_list.contains(object) || self.culled_instanced_lookup.contains(object)
    }

    /// Number of objects that survived main-view culling
    pub fn visible_count(&self) -> usize {
        self.culled_opaque_list.len() + self.culled_instanced_lookup.total_instances()
    }
}
