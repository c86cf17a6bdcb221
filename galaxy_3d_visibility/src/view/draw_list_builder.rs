/// DrawListBuilder — builds the main camera's SceneView each frame.
///
/// 1. Partition renderable objects into the opaque and alpha lists.
/// 2. Cull the opaque list against the camera frustum.
/// 3. Route each survivor to the individual list or an instanced mesh group.
/// 4. Optionally sort the results by mesh.

use crate::camera::Camera;
use crate::culling::culler_for;
use crate::scene::{LightType, ObjectKey, Scene, SceneObject};
use crate::{engine_debug, engine_warn};
use super::frame::FrameContext;
use super::instancing::{BuiltinMeshInstancing, InstancingPolicy};
use super::scene_view::SceneView;

/// Whether an object has what culling needs (meshes, resident data, a
/// known extent). Problems are logged under `source`.
pub(crate) fn is_drawable(key: ObjectKey, object: &SceneObject, source: &str) -> bool {
    if object.meshes().is_empty() {
        engine_warn!(source, "Object {:?} has no meshes, excluded from rendering", key);
        return false;
    }
    if !object.is_loaded() {
        engine_debug!(source, "Object {:?} still loading, skipped", key);
        return false;
    }
    if object.bounding_box().is_empty() {
        engine_warn!(source, "Object {:?} has an empty bounding box, excluded from culling", key);
        return false;
    }
    true
}

pub struct DrawListBuilder {
    policy: Box<dyn InstancingPolicy>,
}

impl Default for DrawListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawListBuilder {
    /// Builder with the default `BuiltinMeshInstancing` policy
    pub fn new() -> Self {
        Self { policy: Box::new(BuiltinMeshInstancing) }
    }

    pub fn with_policy<P: InstancingPolicy + 'static>(policy: P) -> Self {
        Self { policy: Box::new(policy) }
    }

    pub fn build(&self, scene: &Scene, camera: &Camera, ctx: &mut FrameContext) -> SceneView {
        const SOURCE: &str = "galaxy3d::DrawListBuilder";

        let mut view = SceneView::from_camera(camera);
        view.directional_light_view_projection = scene
            .lights()
            .find(|(_, l)| l.is_shadow_caster() && l.light_type() == LightType::Directional)
            .map(|(_, l)| l.view_projection());

        // 1. Partition
        let mut num_scene_objects = 0;
        for (key, object) in scene.objects() {
            if !object.is_renderable() {
                continue;
            }
            num_scene_objects += 1;
            if !is_drawable(key, object, SOURCE) {
                continue;
            }
            view.opaque_list.push(key);
            if object.has_transparent_mesh() {
                view.alpha_list.push(key);
            }
        }

        // 2. Cull
        let settings = ctx.settings().clone();
        let result = culler_for(settings.frustum_cull_main_view).cull(
            &camera.frustum(),
            scene,
            view.opaque_list.as_slice(),
        );

        // 3. Route
        for key in result.visible {
            let Some(object) = scene.object(key) else {
                continue;
            };
            match self.policy.instance_mesh(object) {
                Some(mesh) => view.culled_instanced_lookup.push(mesh, key),
                None => view.culled_opaque_list.push(key),
            }
        }

        // 4. Sort
        if settings.sort_render_lists {
            view.culled_opaque_list.sort_by_mesh(scene);
            view.culled_instanced_lookup.sort_meshes();
        }

        let stats = ctx.stats_mut();
        stats.num_scene_objects = num_scene_objects;
        stats.main_view_culled = result.culled;

        engine_debug!(
            SOURCE,
            "Main view: {} candidates, {} culled, {} individual, {} instanced over {} meshes",
            view.opaque_list.len(),
            result.culled,
            view.culled_opaque_list.len(),
            view.culled_instanced_lookup.total_instances(),
            view.culled_instanced_lookup.len()
        );

        view
    }
}

#[cfg(test)]
#[path = "draw_list_builder_tests.rs"]
mod tests;
