//! Culling module — bounding volumes, frustum planes, visibility tests,
//! and per-view culling strategies.

mod bounds;
mod culler;
mod frustum;
mod visibility;

pub use bounds::{BoundingBox, BoundingSphere};
pub use culler::{culler_for, CullResult, FrustumCuller, PassThroughCuller, ViewCuller};
pub use frustum::{
    FrustumPlaneSet,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR, PLANE_COUNT,
};
pub use visibility::{
    box_inside_sphere_approx, box_visible_from_frustum, sphere_in_frustum,
    sphere_intersects_sphere, BOX_CORNER_EPSILON,
};
