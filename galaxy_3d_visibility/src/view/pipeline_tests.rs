use glam::{Mat4, Vec3};
use crate::config::VisibilitySettings;
use crate::culling::BoundingBox;
use crate::scene::{BuiltinGeometry, DepthTargetId, DepthTargetTable, Light, ObjectMesh, SceneObject};
use super::*;

fn camera_at(z: f32) -> Camera {
    Camera::look_at(Vec3::new(0.0, 0.0, z), Vec3::ZERO, Vec3::Y, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 1000.0)
}

fn cone_at_origin() -> SceneObject {
    SceneObject::new(Mat4::IDENTITY, vec![ObjectMesh::new(BuiltinGeometry::Cone, BoundingBox::new(Vec3::splat(-1.0), Vec3::ONE))])
}

#[test]
fn test_run_frame_updates_lod_from_camera() {
    let mut scene = Scene::new();
    let cone = scene.add_object(cone_at_origin());
    let mesh = BuiltinGeometry::Cone.mesh_id();

    let mut pipeline = VisibilityPipeline::new();
    pipeline.initialize(&scene, &camera_at(50.0));
    let mut ctx = FrameContext::default();

    pipeline.run_frame(&scene, &camera_at(50.0), &DepthTargetTable::new(), &mut ctx);
    assert_eq!(pipeline.lod_value(cone, mesh, &ctx), 0);
    assert_eq!(ctx.stats().lod_changes, 0);

    // Cone thresholds start at 100 then 300
    pipeline.run_frame(&scene, &camera_at(150.0), &DepthTargetTable::new(), &mut ctx);
    assert_eq!(pipeline.lod_value(cone, mesh, &ctx), 1);
    assert_eq!(ctx.stats().lod_changes, 1);
    assert_eq!(ctx.frame_index(), 2);
}

#[test]
fn test_forced_lod_level_overrides_tracking() {
    let mut scene = Scene::new();
    let cone = scene.add_object(cone_at_origin());
    let untracked = scene.add_object(SceneObject::new(
        Mat4::IDENTITY,
        vec![ObjectMesh::new(crate::scene::MeshId::custom(3), BoundingBox::new(Vec3::splat(-1.0), Vec3::ONE))],
    ));

    let mut settings = VisibilitySettings::default();
    settings.forced_lod_level = Some(2);
    let mut ctx = FrameContext::new(settings);

    let mut pipeline = VisibilityPipeline::new();
    pipeline.initialize(&scene, &camera_at(10.0));
    pipeline.run_frame(&scene, &camera_at(10.0), &DepthTargetTable::new(), &mut ctx);

    assert_eq!(pipeline.lod_value(cone, BuiltinGeometry::Cone.mesh_id(), &ctx), 2);
    assert_eq!(pipeline.lod_value(untracked, crate::scene::MeshId::custom(3), &ctx), 2);
    // Tracking itself is untouched
    assert_eq!(pipeline.lod_manager().entry(cone, BuiltinGeometry::Cone.mesh_id()).unwrap().active_lod, 0);
}

#[test]
fn test_run_frame_builds_both_views() {
    let mut scene = Scene::new();
    let cone = scene.add_object(cone_at_origin());
    let light = scene.add_light(Light::point(Vec3::new(0.0, 5.0, 0.0), 20.0));
    let mut targets = DepthTargetTable::new();
    targets.assign(light, DepthTargetId(1));

    let mut pipeline = VisibilityPipeline::new();
    let mut ctx = FrameContext::default();
    let views = pipeline.run_frame(&scene, &camera_at(10.0), &targets, &mut ctx);

    assert!(views.scene_view.is_visible(cone));
    assert!(views.shadow_view.casts_anywhere(cone));
    assert!(views.shadow_view.point(light).unwrap().face(crate::scene::CubemapFace::NegativeY).casters.contains(cone));
    assert_eq!(ctx.stats().num_scene_objects, 1);
    assert_eq!(ctx.stats().num_point_lights, 1);
}

#[test]
fn test_stats_reset_each_frame() {
    let mut scene = Scene::new();
    scene.add_object(SceneObject::new(
        Mat4::from_translation(Vec3::new(0.0, 0.0, 500.0)),
        vec![ObjectMesh::new(BuiltinGeometry::Cube, BoundingBox::new(Vec3::splat(-1.0), Vec3::ONE))],
    ));

    let mut pipeline = VisibilityPipeline::new();
    let mut ctx = FrameContext::default();
    for _ in 0..3 {
        pipeline.run_frame(&scene, &camera_at(10.0), &DepthTargetTable::new(), &mut ctx);
        assert_eq!(ctx.stats().main_view_culled, 1);
    }
}
