use glam::{Mat4, Vec3};
use super::*;

#[test]
fn test_position_from_view_matrix() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let camera = Camera::new(
        Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y),
        Mat4::perspective_rh_gl(1.0, 1.0, 0.1, 100.0),
    );
    assert!((camera.position() - eye).length() < 1e-4);
}

#[test]
fn test_set_view_updates_position() {
    let mut camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 1.0, 1.0, 0.1, 100.0);
    let eye = Vec3::new(-2.0, 1.0, 8.0);
    camera.set_view(Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y));
    assert!((camera.position() - eye).length() < 1e-4);
}

#[test]
fn test_view_projection_order() {
    let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, 1.0, 1.5, 0.1, 50.0);
    let expected = *camera.projection_matrix() * *camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(), expected);
}

#[test]
fn test_frustum_matches_extraction() {
    let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, 1.0, 1.0, 0.1, 50.0);
    assert!(camera.frustum().contains_point(Vec3::ZERO));
    assert!(!camera.frustum().contains_point(Vec3::new(0.0, 0.0, 10.0)));
}
