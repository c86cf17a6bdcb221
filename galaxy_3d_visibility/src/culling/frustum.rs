/// Frustum plane set — six clipping planes extracted from a view-projection.
///
/// Each plane is a Vec4 (A, B, C, D). A point P is on the inside of a plane
/// when `A*x + B*y + C*z + D > 0`. Planes are kept exactly as extracted
/// (not normalized); use `signed_distance()` for world-unit distances.
///
/// Extraction assumes a clip-space depth range of [-w, w]. With a [0, w]
/// projection the near plane lands slightly in front of the camera instead
/// of on the true near plane, which only makes culling more conservative.

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

pub const PLANE_COUNT: usize = 6;

/// Six frustum planes: left, right, bottom, top, near, far.
///
/// Built once per view per frame and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlaneSet {
    planes: [Vec4; PLANE_COUNT],
}

impl FrustumPlaneSet {
    /// Extract the planes from a combined view-projection matrix
    /// (Gribb & Hartmann). Deterministic: identical input gives
    /// bit-identical planes.
    pub fn extract_from_matrix(view_projection: &Mat4) -> Self {
        // m[col][row]
        let m = view_projection.to_cols_array_2d();
        let row = |r: usize| Vec4::new(m[0][r], m[1][r], m[2][r], m[3][r]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        Self {
            planes: [
                r3 + r0, // left
                r3 - r0, // right
                r3 + r1, // bottom
                r3 - r1, // top
                r3 + r2, // near
                r3 - r2, // far
            ],
        }
    }

    /// Build directly from plane coefficients.
    pub fn from_planes(planes: [Vec4; PLANE_COUNT]) -> Self {
        Self { planes }
    }

    pub fn planes(&self) -> &[Vec4; PLANE_COUNT] {
        &self.planes
    }

    /// Plane by index (`PLANE_LEFT` .. `PLANE_FAR`).
    pub fn plane(&self, index: usize) -> Vec4 {
        self.planes[index]
    }

    /// Raw plane equation value `A*x + B*y + C*z + D` (unnormalized).
    pub fn evaluate(&self, index: usize, point: Vec3) -> f32 {
        self.planes[index].dot(point.extend(1.0))
    }

    /// Signed distance in world units from `point` to plane `index`.
    ///
    /// Positive inside. A plane with a zero-length normal yields its raw value.
    pub fn signed_distance(&self, index: usize, point: Vec3) -> f32 {
        let plane = self.planes[index];
        let normal_len = plane.truncate().length();
        let value = plane.dot(point.extend(1.0));
        if normal_len > 0.0 { value / normal_len } else { value }
    }

    /// True when `point` is strictly inside every plane.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..PLANE_COUNT).all(|i| self.evaluate(i, point) > 0.0)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
