//! Visibility predicates: sphere and box against a frustum, sphere against
//! sphere. All tests are conservative (false positives allowed, false
//! negatives not).

use super::bounds::{BoundingBox, BoundingSphere};
use super::frustum::{FrustumPlaneSet, PLANE_COUNT};

/// Tolerance for a box corner to count as inside a plane
pub const BOX_CORNER_EPSILON: f32 = 0.000002;

/// Sphere against frustum.
///
/// A plane rejects the sphere when the center lies behind it by more than
/// the radius. Distances are measured in world units.
pub fn sphere_in_frustum(frustum: &FrustumPlaneSet, sphere: &BoundingSphere) -> bool {
    (0..PLANE_COUNT).all(|i| {
        let d = frustum.signed_distance(i, sphere.center);
        !(d < 0.0 && -d > sphere.radius)
    })
}

/// World-space box against frustum.
///
/// A plane rejects the box when none of its 8 corners is on the inside
/// (beyond `BOX_CORNER_EPSILON`). A point-like box degenerates to a
/// single-point test.
pub fn box_visible_from_frustum(frustum: &FrustumPlaneSet, bbox: &BoundingBox) -> bool {
    let corners = bbox.corners();
    (0..PLANE_COUNT).all(|i| {
        corners.iter().any(|c| frustum.evaluate(i, *c) > BOX_CORNER_EPSILON)
    })
}

/// Overlap (or touch) of two spheres.
pub fn sphere_intersects_sphere(a: &BoundingSphere, b: &BoundingSphere) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) <= reach * reach
}

/// Approximate containment of a box in a sphere: true when the box's
/// bounding sphere lies entirely inside `sphere`.
pub fn box_inside_sphere_approx(bbox: &BoundingBox, sphere: &BoundingSphere) -> bool {
    let inner = bbox.bounding_sphere();
    inner.center.distance(sphere.center) + inner.radius <= sphere.radius
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
