/// Camera — passive view/projection container for the main view.
///
/// The caller drives the camera; the pipeline only reads it once per frame
/// to extract the frustum and the viewer position used for LOD.

use glam::{Mat4, Vec3};
use crate::culling::FrustumPlaneSet;

#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    /// World-space eye position, derived from the view matrix
    position: Vec3,
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            position: view.inverse().col(3).truncate(),
        }
    }

    /// Right-handed perspective camera at `eye` looking at `target`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        let view = Mat4::look_at_rh(eye, target, up);
        let projection = Mat4::perspective_rh_gl(fov_y_radians, aspect, near, far);
        Self { view_matrix: view, projection_matrix: projection, position: eye }
    }

    // ===== GETTERS =====

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Frustum planes of the current view-projection
    pub fn frustum(&self) -> FrustumPlaneSet {
        FrustumPlaneSet::extract_from_matrix(&self.view_projection_matrix())
    }

    // ===== SETTERS =====

    /// Set the view matrix; the eye position follows.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
        self.position = matrix.inverse().col(3).truncate();
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
