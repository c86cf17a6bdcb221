use glam::{Mat4, Vec3};
use crate::config::VisibilitySettings;
use crate::culling::BoundingBox;
use crate::scene::{BuiltinGeometry, DepthTargetTable, MeshId, ObjectMesh, RenderFlags, SceneObject};
use super::*;

fn camera() -> Camera {
    Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0)
}

fn unit_box() -> BoundingBox {
    BoundingBox::new(Vec3::splat(-1.0), Vec3::ONE)
}

fn caster(mesh: impl Into<MeshId>, at: Vec3) -> SceneObject {
    SceneObject::new(Mat4::from_translation(at), vec![ObjectMesh::new(mesh, unit_box())])
}

/// Registry that hands every light a target
struct AllTargets;

impl DepthTargetRegistry for AllTargets {
    fn depth_target(&self, light: LightId) -> Option<DepthTargetId> {
        Some(DepthTargetId(light.0 as u32))
    }
}

// ============================================================================
// Point lights
// ============================================================================

#[test]
fn test_point_light_faces_split_casters() {
    let mut scene = Scene::new();
    let near_positive_x: Vec<ObjectKey> = [
        Vec3::new(10.0, 1.0, 1.0),
        Vec3::new(10.0, -1.0, 1.0),
        Vec3::new(10.0, 1.0, -1.0),
        Vec3::new(10.0, -1.0, -1.0),
    ]
    .into_iter()
    .map(|p| scene.add_object(caster(MeshId::custom(0), p)))
    .collect();
    let negative_x = scene.add_object(caster(MeshId::custom(0), Vec3::new(-10.0, 0.0, 0.0)));
    for p in [
        Vec3::new(-12.0, 0.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
        Vec3::new(0.0, -10.0, 0.0),
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, -10.0),
    ] {
        scene.add_object(caster(MeshId::custom(0), p));
    }
    let light = scene.add_light(Light::point(Vec3::ZERO, 30.0));

    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);

    let point = shadow_view.point(light).unwrap();
    let positive = point.face(CubemapFace::PositiveX);
    assert_eq!(positive.casters.as_slice(), near_positive_x.as_slice());
    assert_eq!(positive.mesh_draw_data.instances(MeshId::custom(0)).len(), 4);

    let negative = point.face(CubemapFace::NegativeX);
    for key in &near_positive_x {
        assert!(!negative.casters.contains(*key));
        assert!(!negative.mesh_draw_data.contains_object(*key));
    }
    assert!(negative.casters.contains(negative_x));

    // Every caster lands in exactly one face
    assert_eq!(ctx.stats().shadow_casters_culled, 10 * 6 - 10);
    assert_eq!(ctx.stats().num_point_lights, 1);
    assert_eq!(ctx.stats().lights_culled, 0);
}

#[test]
fn test_point_face_instances_carry_world_matrix() {
    let mut scene = Scene::new();
    let at = Vec3::new(0.0, 0.0, -8.0);
    let key = scene.add_object(SceneObject::new(
        Mat4::from_translation(at),
        vec![
            ObjectMesh::new(MeshId::custom(0), unit_box()),
            // Second mesh sits far behind the light, outside the -Z face
            ObjectMesh::new(MeshId::custom(1), BoundingBox::new(Vec3::new(-1.0, -1.0, 15.0), Vec3::new(1.0, 1.0, 17.0))),
        ],
    ));
    let light = scene.add_light(Light::point(Vec3::ZERO, 30.0));

    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut FrameContext::default());
    let face = shadow_view.point(light).unwrap().face(CubemapFace::NegativeZ);

    assert!(face.casters.contains(key));
    let instances = face.mesh_draw_data.instances(MeshId::custom(0));
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].object, key);
    assert_eq!(instances[0].world, Mat4::from_translation(at));
    assert!(face.mesh_draw_data.instances(MeshId::custom(1)).is_empty());
}

#[test]
fn test_point_light_outside_view_is_culled() {
    let mut scene = Scene::new();
    scene.add_object(caster(MeshId::custom(0), Vec3::new(0.0, 0.0, 495.0)));
    // Behind the camera and well out of range
    scene.add_light(Light::point(Vec3::new(0.0, 0.0, 500.0), 10.0));

    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);
    assert!(shadow_view.points.is_empty());
    assert_eq!(ctx.stats().lights_culled, 1);
    assert_eq!(ctx.stats().num_point_lights, 0);
}

#[test]
fn test_light_culling_disabled_keeps_point_light() {
    let mut scene = Scene::new();
    let key = scene.add_object(caster(MeshId::custom(0), Vec3::new(0.0, 0.0, 495.0)));
    let light = scene.add_light(Light::point(Vec3::new(0.0, 0.0, 500.0), 10.0));

    let mut settings = VisibilitySettings::default();
    settings.frustum_cull_local_lights = false;
    let mut ctx = FrameContext::new(settings);
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);

    let point = shadow_view.point(light).unwrap();
    // Without culling every face receives every caster
    for face in &point.faces {
        assert!(face.casters.contains(key));
        assert!(face.mesh_draw_data.contains_object(key));
    }
    assert_eq!(ctx.stats().lights_culled, 0);
    assert_eq!(ctx.stats().shadow_casters_culled, 0);
}

#[test]
fn test_camera_inside_point_range_keeps_light() {
    let mut scene = Scene::new();
    // Light sits behind the camera, but the camera is within its range
    let light = scene.add_light(Light::point(Vec3::new(0.0, 0.0, 5.0), 10.0));
    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);
    assert!(shadow_view.point(light).is_some());
    assert_eq!(ctx.stats().lights_culled, 0);
}

// ============================================================================
// Spot and directional lights
// ============================================================================

#[test]
fn test_spot_light_casters_and_instancing() {
    let mut scene = Scene::new();
    let cube = scene.add_object(caster(BuiltinGeometry::Cube, Vec3::new(1.0, 0.0, 0.0)));
    let custom = scene.add_object(caster(MeshId::custom(0), Vec3::new(-1.0, 0.0, 0.0)));
    let outside = scene.add_object(caster(MeshId::custom(0), Vec3::new(40.0, 0.0, 0.0)));
    let light = scene.add_light(Light::spot(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, 60.0, 50.0));

    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);

    let spot = shadow_view.spot(light).unwrap();
    assert_eq!(spot.casters.as_slice(), &[cube, custom]);
    assert_eq!(spot.individual.as_slice(), &[custom]);
    assert_eq!(spot.instanced.get(BuiltinGeometry::Cube.mesh_id()).unwrap(), &[cube]);
    assert!(!spot.casters.contains(outside));
    assert_eq!(ctx.stats().num_spot_lights, 1);
    assert_eq!(ctx.stats().shadow_casters_culled, 1);
}

#[test]
fn test_spot_light_never_culled_by_camera() {
    let mut scene = Scene::new();
    // Far behind the camera
    let light = scene.add_light(Light::spot(Vec3::new(0.0, 0.0, 900.0), Vec3::Z, 45.0, 10.0));
    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);
    assert!(shadow_view.spot(light).is_some());
    assert_eq!(ctx.stats().lights_culled, 0);
}

#[test]
fn test_directional_light_view() {
    let mut scene = Scene::new();
    let lit = scene.add_object(caster(BuiltinGeometry::Sphere, Vec3::ZERO));
    let far = scene.add_object(caster(MeshId::custom(0), Vec3::new(200.0, 0.0, 0.0)));
    let sun = Light::directional(Vec3::NEG_Y, 50.0, 100.0, 100.0);
    let light = scene.add_light(sun);

    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);

    let directional = shadow_view.directional.as_ref().unwrap();
    assert_eq!(directional.light, light);
    assert_eq!(directional.view_projection, sun.view_projection());
    assert!(directional.casters.contains(lit));
    assert!(!directional.casters.contains(far));
    assert!(directional.instanced.contains(lit));
    assert!(ctx.stats().has_directional_light);
}

#[test]
fn test_second_directional_light_ignored() {
    let mut scene = Scene::new();
    let first = scene.add_light(Light::directional(Vec3::NEG_Y, 50.0, 100.0, 100.0));
    scene.add_light(Light::directional(Vec3::NEG_X, 50.0, 100.0, 100.0));
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut FrameContext::default());
    assert_eq!(shadow_view.directional.unwrap().light, first);
}

// ============================================================================
// Exclusions
// ============================================================================

#[test]
fn test_no_shadow_lights_gives_empty_view() {
    let mut scene = Scene::new();
    scene.add_object(caster(MeshId::custom(0), Vec3::ZERO));
    scene.add_light(Light::point(Vec3::ZERO, 10.0).with_shadows(false));
    scene.add_light(Light::spot(Vec3::Y, Vec3::NEG_Y, 45.0, 10.0).with_enabled(false));

    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut ctx);
    assert!(shadow_view.is_empty());
    assert_eq!(ctx.stats(), &crate::view::FrameStats::default());
}

#[test]
fn test_missing_depth_target_skips_light() {
    let mut scene = Scene::new();
    let with_target = scene.add_light(Light::spot(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, 60.0, 50.0));
    let without_target = scene.add_light(Light::spot(Vec3::new(5.0, 10.0, 0.0), Vec3::NEG_Y, 60.0, 50.0));

    let mut targets = DepthTargetTable::new();
    targets.assign(with_target, DepthTargetId(7));

    let mut ctx = FrameContext::default();
    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &targets, &mut ctx);
    assert_eq!(shadow_view.spot(with_target).unwrap().depth_target, DepthTargetId(7));
    assert!(shadow_view.spot(without_target).is_none());
    assert_eq!(ctx.stats().num_spot_lights, 1);
}

#[test]
fn test_non_casters_excluded() {
    let mut scene = Scene::new();
    let casting = scene.add_object(caster(MeshId::custom(0), Vec3::ZERO));
    let no_shadow = scene.add_object(caster(MeshId::custom(0), Vec3::ZERO).with_flags(RenderFlags::RENDER));
    let hidden = scene.add_object(caster(MeshId::custom(0), Vec3::ZERO).with_flags(RenderFlags::CAST_SHADOW));
    let loading = scene.add_object(caster(MeshId::custom(0), Vec3::ZERO).with_loaded(false));
    let light = scene.add_light(Light::spot(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, 60.0, 50.0));

    let shadow_view = ShadowViewBuilder::new().build(&scene, &camera(), &AllTargets, &mut FrameContext::default());
    let spot = shadow_view.spot(light).unwrap();
    assert_eq!(spot.casters.as_slice(), &[casting]);
    for key in [no_shadow, hidden, loading] {
        assert!(!shadow_view.casts_anywhere(key));
    }
    assert!(shadow_view.casts_anywhere(casting));
}
