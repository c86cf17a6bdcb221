/// ShadowViewBuilder — builds the per-light shadow-caster lists each frame.
///
/// Casters are renderable, drawable objects flagged `CAST_SHADOW`. Lights
/// are visited in scene order:
/// - spot / directional: one frustum, casters culled into a list plus its
///   instanced split
/// - point: six cubemap-face frustums, each culled independently, with a
///   per-mesh draw list per face
///
/// With local-light culling enabled, point lights that cannot affect the
/// camera view are dropped before any caster work.

use glam::Mat4;
use crate::camera::Camera;
use crate::culling::{
    box_visible_from_frustum, culler_for, sphere_in_frustum, FrustumPlaneSet, ViewCuller,
};
use crate::scene::{
    CubemapFace, DepthTargetId, DepthTargetRegistry, Light, LightId, LightKind, ObjectKey, Scene,
};
use crate::{engine_debug, engine_error, engine_warn};
use super::draw_list_builder::is_drawable;
use super::frame::FrameContext;
use super::instancing::{BuiltinCasterInstancing, InstancingPolicy};
use super::shadow_view::{CubeFaceView, LightShadowView, PointShadowView, ShadowView};

const SOURCE: &str = "galaxy3d::ShadowViewBuilder";

pub struct ShadowViewBuilder {
    policy: Box<dyn InstancingPolicy>,
}

impl Default for ShadowViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadowViewBuilder {
    /// Builder with the default `BuiltinCasterInstancing` policy
    pub fn new() -> Self {
        Self { policy: Box::new(BuiltinCasterInstancing) }
    }

    pub fn with_policy<P: InstancingPolicy + 'static>(policy: P) -> Self {
        Self { policy: Box::new(policy) }
    }

    pub fn build(
        &self,
        scene: &Scene,
        camera: &Camera,
        targets: &dyn DepthTargetRegistry,
        ctx: &mut FrameContext,
    ) -> ShadowView {
        let mut shadow_view = ShadowView::default();

        let shadow_lights: Vec<(LightId, &Light)> =
            scene.lights().filter(|(_, l)| l.is_shadow_caster()).collect();
        if shadow_lights.is_empty() {
            engine_debug!(SOURCE, "No shadow-casting lights this frame");
            return shadow_view;
        }

        let casters: Vec<ObjectKey> = scene
            .objects()
            .filter(|(key, object)| object.casts_shadow() && is_drawable(*key, object, SOURCE))
            .map(|(key, _)| key)
            .collect();

        let cull_local_lights = ctx.settings().frustum_cull_local_lights;
        let mut culler = culler_for(cull_local_lights);
        let camera_frustum = camera.frustum();

        for (id, light) in shadow_lights {
            if cull_local_lights && !Self::affects_view(light, camera, &camera_frustum) {
                ctx.stats_mut().lights_culled += 1;
                continue;
            }

            let Some(depth_target) = targets.depth_target(id) else {
                engine_error!(SOURCE, "No depth target for shadowing light {:?}, skipped", id);
                continue;
            };

            match light.kind {
                LightKind::Spot { .. } => {
                    let view = self.single_frustum_view(id, light, depth_target, scene, &casters, culler.as_mut(), ctx);
                    ctx.stats_mut().num_spot_lights += 1;
                    shadow_view.spots.push(view);
                }
                LightKind::Directional { .. } => {
                    if shadow_view.directional.is_some() {
                        engine_warn!(SOURCE, "Extra directional light {:?} ignored, one shadowing directional light supported", id);
                        continue;
                    }
                    let view = self.single_frustum_view(id, light, depth_target, scene, &casters, culler.as_mut(), ctx);
                    ctx.stats_mut().has_directional_light = true;
                    shadow_view.directional = Some(view);
                }
                LightKind::Point { .. } => {
                    let view = Self::point_view(id, light, depth_target, scene, &casters, culler.as_mut(), cull_local_lights, ctx);
                    ctx.stats_mut().num_point_lights += 1;
                    shadow_view.points.push(view);
                }
            }
        }

        engine_debug!(
            SOURCE,
            "Shadow views: {} spot, {} point, directional {}, {} lights culled",
            shadow_view.spots.len(),
            shadow_view.points.len(),
            shadow_view.directional.is_some(),
            ctx.stats().lights_culled
        );

        shadow_view
    }

    /// Spot lights always count; point lights count when the camera is in
    /// range or the range sphere touches the camera frustum.
    fn affects_view(light: &Light, camera: &Camera, camera_frustum: &FrustumPlaneSet) -> bool {
        match light.range_sphere() {
            Some(sphere) => {
                sphere.contains_point(camera.position()) || sphere_in_frustum(camera_frustum, &sphere)
            }
            None => true,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn single_frustum_view(
        &self,
        id: LightId,
        light: &Light,
        depth_target: DepthTargetId,
        scene: &Scene,
        casters: &[ObjectKey],
        culler: &mut dyn ViewCuller,
        ctx: &mut FrameContext,
    ) -> LightShadowView {
        let view_projection = light.view_projection();
        let frustum = FrustumPlaneSet::extract_from_matrix(&view_projection);
        let result = culler.cull(&frustum, scene, casters);
        ctx.stats_mut().shadow_casters_culled += result.culled;

        let mut view = LightShadowView::new(id, depth_target, view_projection);
        for key in result.visible {
            let Some(object) = scene.object(key) else {
                continue;
            };
            view.casters.push(key);
            match self.policy.instance_mesh(object) {
                Some(mesh) => view.instanced.push(mesh, key),
                None => view.individual.push(key),
            }
        }

        if ctx.settings().sort_render_lists {
            view.casters.sort_by_mesh(scene);
            view.individual.sort_by_mesh(scene);
            view.instanced.sort_meshes();
        }
        view
    }

    #[allow(clippy::too_many_arguments)]
    fn point_view(
        id: LightId,
        light: &Light,
        depth_target: DepthTargetId,
        scene: &Scene,
        casters: &[ObjectKey],
        culler: &mut dyn ViewCuller,
        cull_meshes: bool,
        ctx: &mut FrameContext,
    ) -> PointShadowView {
        let faces = CubemapFace::ALL.map(|face| {
            let view_projection = light.face_view_projection(face).unwrap_or(Mat4::IDENTITY);
            let frustum = FrustumPlaneSet::extract_from_matrix(&view_projection);
            let result = culler.cull(&frustum, scene, casters);
            ctx.stats_mut().shadow_casters_culled += result.culled;

            let mut face_view = CubeFaceView { view_projection, ..Default::default() };
            for key in result.visible {
                let Some(object) = scene.object(key) else {
                    continue;
                };
                face_view.casters.push(key);

                let world = *object.world_matrix();
                for mesh in object.meshes() {
                    if mesh.bounding_box.is_empty() {
                        continue;
                    }
                    if !cull_meshes || box_visible_from_frustum(&frustum, &mesh.bounding_box.transformed(&world)) {
                        face_view.mesh_draw_data.add(mesh.id, key, world);
                    }
                }
            }
            face_view
        });

        PointShadowView { light: id, depth_target, faces }
    }
}

#[cfg(test)]
#[path = "shadow_view_builder_tests.rs"]
mod tests;
