use glam::{Mat4, Vec3};
use crate::config::VisibilitySettings;
use crate::culling::BoundingBox;
use crate::scene::{BuiltinGeometry, ObjectMesh, SceneObject};
use super::*;

fn unit_box() -> BoundingBox {
    BoundingBox::new(Vec3::splat(-1.0), Vec3::ONE)
}

fn object_at(x: f32, mesh: impl Into<MeshId>) -> SceneObject {
    SceneObject::new(Mat4::from_translation(Vec3::new(x, 0.0, 0.0)), vec![ObjectMesh::new(mesh, unit_box())])
}

fn three_level_settings() -> LodSettings {
    LodSettings::new(vec![10.0, 50.0, 100.0]).unwrap()
}

// ============================================================================
// Registration / update
// ============================================================================

#[test]
fn test_update_tracks_distance() {
    let mut scene = Scene::new();
    let mesh = MeshId::custom(0);
    let key = scene.add_object(SceneObject::new(
        Mat4::IDENTITY,
        vec![ObjectMesh::new(mesh, unit_box()).with_lod_count(3).unwrap()],
    ));

    let mut lod = LodManager::new();
    lod.register_mesh_lod(key, mesh, three_level_settings());
    lod.set_viewer(Vec3::ZERO);
    let ctx = FrameContext::default();

    let expected = [(0.0, 0), (15.0, 1), (60.0, 2), (200.0, 0)];
    for (x, level) in expected {
        scene.set_world_matrix(key, Mat4::from_translation(Vec3::new(x, 0.0, 0.0)));
        lod.update(&scene);
        assert_eq!(lod.lod_value(key, mesh, &ctx), level, "distance {}", x);
    }
}

#[test]
fn test_update_reports_changes_only() {
    let mut scene = Scene::new();
    let key = scene.add_object(object_at(0.0, BuiltinGeometry::Sphere));
    let mut lod = LodManager::new();
    lod.register_mesh_lod(key, BuiltinGeometry::Sphere.mesh_id(), LodSettings::builtin(BuiltinGeometry::Sphere).unwrap());
    lod.set_viewer(Vec3::new(100.0, 0.0, 0.0));

    assert_eq!(lod.update(&scene), 1);
    assert_eq!(lod.update(&scene), 0);
}

#[test]
fn test_level_clamped_to_mesh_lod_count() {
    let mut scene = Scene::new();
    let mesh = MeshId::custom(1);
    let key = scene.add_object(SceneObject::new(
        Mat4::from_translation(Vec3::new(60.0, 0.0, 0.0)),
        vec![ObjectMesh::new(mesh, unit_box()).with_lod_count(2).unwrap()],
    ));
    let mut lod = LodManager::new();
    lod.register_mesh_lod(key, mesh, three_level_settings());
    lod.set_viewer(Vec3::ZERO);
    lod.update(&scene);
    assert_eq!(lod.entry(key, mesh).unwrap().active_lod, 1);
}

#[test]
fn test_update_without_viewer_is_noop() {
    let mut scene = Scene::new();
    let mesh = MeshId::custom(0);
    let key = scene.add_object(object_at(60.0, mesh));
    let mut lod = LodManager::new();
    lod.register_mesh_lod(key, mesh, three_level_settings());

    assert_eq!(lod.update(&scene), 0);
    assert_eq!(lod.entry(key, mesh).unwrap().active_lod, 0);
}

#[test]
fn test_unregistered_pair_reads_zero() {
    let mut scene = Scene::new();
    let key = scene.add_object(object_at(0.0, MeshId::custom(0)));
    let lod = LodManager::new();
    assert_eq!(lod.lod_value(key, MeshId::custom(0), &FrameContext::default()), 0);
}

#[test]
fn test_forced_level_overrides_tracking() {
    let mut scene = Scene::new();
    let mesh = MeshId::custom(0);
    let key = scene.add_object(object_at(0.0, mesh));
    let mut lod = LodManager::new();
    lod.register_mesh_lod(key, mesh, three_level_settings());
    lod.set_viewer(Vec3::ZERO);
    lod.update(&scene);

    let mut settings = VisibilitySettings::default();
    settings.forced_lod_level = Some(2);
    let ctx = FrameContext::new(settings);
    assert_eq!(lod.lod_value(key, mesh, &ctx), 2);
    assert_eq!(lod.lod_value(key, MeshId::custom(9), &ctx), 2);
}

#[test]
fn test_unregister_and_reset() {
    let mut scene = Scene::new();
    let mesh = MeshId::custom(0);
    let a = scene.add_object(object_at(0.0, mesh));
    let b = scene.add_object(object_at(5.0, mesh));
    let mut lod = LodManager::new();
    lod.register_mesh_lod(a, mesh, three_level_settings());
    lod.register_mesh_lod(b, mesh, three_level_settings());
    assert_eq!(lod.tracked_count(), 2);

    assert!(lod.unregister_object(a));
    assert!(!lod.unregister_object(a));
    assert_eq!(lod.tracked_count(), 1);

    lod.set_viewer(Vec3::ONE);
    lod.reset();
    assert_eq!(lod.tracked_count(), 0);
    assert_eq!(lod.viewer(), None);
}

// ============================================================================
// Initialize
// ============================================================================

#[test]
fn test_initialize_registers_builtin_meshes_with_settings() {
    let mut scene = Scene::new();
    let sphere = scene.add_object(object_at(100.0, BuiltinGeometry::Sphere));
    let cube = scene.add_object(object_at(0.0, BuiltinGeometry::Cube));
    let custom = scene.add_object(object_at(0.0, MeshId::custom(0)));
    scene.add_object(SceneObject::new(Mat4::IDENTITY, Vec::new()));

    let mut lod = LodManager::new();
    lod.initialize(&scene, Vec3::ZERO);

    assert_eq!(lod.tracked_count(), 1);
    assert_eq!(lod.entry(sphere, BuiltinGeometry::Sphere.mesh_id()).unwrap().active_lod, 1);
    assert!(lod.entry(cube, BuiltinGeometry::Cube.mesh_id()).is_none());
    assert!(lod.entry(custom, MeshId::custom(0)).is_none());
}

#[test]
fn test_initialize_uses_last_mesh() {
    let mut scene = Scene::new();
    let key = scene.add_object(SceneObject::new(
        Mat4::IDENTITY,
        vec![
            ObjectMesh::new(BuiltinGeometry::Sphere, unit_box()),
            ObjectMesh::new(BuiltinGeometry::Cylinder, unit_box()),
        ],
    ));
    let mut lod = LodManager::new();
    lod.initialize(&scene, Vec3::ZERO);
    assert!(lod.entry(key, BuiltinGeometry::Cylinder.mesh_id()).is_some());
    assert!(lod.entry(key, BuiltinGeometry::Sphere.mesh_id()).is_none());
}
