/// VisibilityPipeline — runs one frame of visibility work in order:
/// LOD update, main-view draw lists, then shadow views.

use crate::camera::Camera;
use crate::lod::LodManager;
use crate::scene::{DepthTargetRegistry, MeshId, ObjectKey, Scene};
use crate::engine_trace;
use super::draw_list_builder::DrawListBuilder;
use super::frame::FrameContext;
use super::scene_view::SceneView;
use super::shadow_view::ShadowView;
use super::shadow_view_builder::ShadowViewBuilder;

/// Everything the render passes read for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameViews {
    pub scene_view: SceneView,
    pub shadow_view: ShadowView,
}

#[derive(Default)]
pub struct VisibilityPipeline {
    draw_lists: DrawListBuilder,
    shadows: ShadowViewBuilder,
    lod: LodManager,
}

impl VisibilityPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builders(draw_lists: DrawListBuilder, shadows: ShadowViewBuilder) -> Self {
        Self { draw_lists, shadows, lod: LodManager::new() }
    }

    /// Register built-in meshes for LOD tracking, seen from `camera`.
    /// Call after loading a scene.
    pub fn initialize(&mut self, scene: &Scene, camera: &Camera) {
        self.lod.initialize(scene, camera.position());
    }

    pub fn lod_manager(&self) -> &LodManager {
        &self.lod
    }

    pub fn lod_manager_mut(&mut self) -> &mut LodManager {
        &mut self.lod
    }

    /// Level to draw `mesh` of `object` at, honoring the frame's forced level
    pub fn lod_value(&self, object: ObjectKey, mesh: MeshId, ctx: &FrameContext) -> usize {
        self.lod.lod_value(object, mesh, ctx)
    }

    /// Build this frame's views. Starts a new frame on `ctx`, so its
    /// statistics describe this call only.
    pub fn run_frame(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        targets: &dyn DepthTargetRegistry,
        ctx: &mut FrameContext,
    ) -> FrameViews {
        ctx.begin_frame();
        engine_trace!("galaxy3d::VisibilityPipeline", "Frame {}", ctx.frame_index());

        self.lod.set_viewer(camera.position());
        ctx.stats_mut().lod_changes = self.lod.update(scene);

        let scene_view = self.draw_lists.build(scene, camera, ctx);
        let shadow_view = self.shadows.build(scene, camera, targets, ctx);

        FrameViews { scene_view, shadow_view }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
