/// Bounding volumes — axis-aligned boxes and spheres.
///
/// Boxes are stored in the local space of their mesh/object and moved to
/// world space at culling time with `transformed()`.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};

// ===== BOUNDING BOX =====

/// Axis-aligned bounding box (`low <= high` per axis).
///
/// `BoundingBox::EMPTY` (both corners at the origin) marks an object whose
/// extent is unknown. It is never culled against a frustum; the builders
/// report and exclude it. Any other zero-volume box is a valid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub low: Vec3,
    /// Maximum corner
    pub high: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    /// Degenerate "no extent" box
    pub const EMPTY: BoundingBox = BoundingBox { low: Vec3::ZERO, high: Vec3::ZERO };

    pub fn new(low: Vec3, high: Vec3) -> Self {
        Self { low, high }
    }

    /// Checked constructor: rejects non-finite corners and `low > high`.
    pub fn try_new(low: Vec3, high: Vec3) -> Result<Self> {
        let bbox = Self { low, high };
        if bbox.is_valid() {
            Ok(bbox)
        } else {
            Err(Error::InvalidBoundingBox(format!("low {:?} high {:?}", low, high)))
        }
    }

    /// Box centered on `center` with half-size `half_extent`
    pub fn from_center_extent(center: Vec3, half_extent: Vec3) -> Self {
        let half_extent = half_extent.abs();
        Self { low: center - half_extent, high: center + half_extent }
    }

    /// Smallest box containing all `points`, or `EMPTY` when there are none.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::EMPTY;
        };
        rest.iter().fold(Self::new(*first, *first), |acc, p| {
            Self::new(acc.low.min(*p), acc.high.max(*p))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.low == Vec3::ZERO && self.high == Vec3::ZERO
    }

    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low.cmple(self.high).all()
    }

    /// True when the box has no volume but is not `EMPTY` (tested as a point).
    pub fn is_point_like(&self) -> bool {
        !self.is_empty() && self.low == self.high
    }

    pub fn center(&self) -> Vec3 {
        (self.low + self.high) * 0.5
    }

    /// Half-size per axis
    pub fn extent(&self) -> Vec3 {
        (self.high - self.low) * 0.5
    }

    /// The 8 corners, low corner first, then x/y/z combinations.
    pub fn corners(&self) -> [Vec3; 8] {
        let (l, h) = (self.low, self.high);
        [
            Vec3::new(l.x, l.y, l.z),
            Vec3::new(h.x, l.y, l.z),
            Vec3::new(l.x, h.y, l.z),
            Vec3::new(h.x, h.y, l.z),
            Vec3::new(l.x, l.y, h.z),
            Vec3::new(h.x, l.y, h.z),
            Vec3::new(l.x, h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
        ]
    }

    /// World-space box of this local-space box under `matrix`.
    ///
    /// Arvo's method: each matrix axis is scaled by the box extents and the
    /// min/max contributions accumulated, giving the tightest axis-aligned
    /// box around the transformed corners. Stays correct under rotation.
    pub fn transformed(&self, matrix: &Mat4) -> BoundingBox {
        let translation = matrix.col(3).truncate();
        let mut low = translation;
        let mut high = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.low[i];
            let b = axis * self.high[i];
            low += a.min(b);
            high += a.max(b);
        }

        BoundingBox { low, high }
    }

    /// Smallest box containing both boxes. `EMPTY` operands are ignored.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (_, true) => *self,
            _ => BoundingBox { low: self.low.min(other.low), high: self.high.max(other.high) },
        }
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.low.cmple(point).all() && point.cmple(self.high).all()
    }

    /// Test if this box overlaps or touches another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.low.cmple(other.high).all() && other.low.cmple(self.high).all()
    }

    /// Sphere through the corners (center, half-diagonal).
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere { center: self.center(), radius: self.extent().length() }
    }
}

// ===== BOUNDING SPHERE =====

/// Sphere volume, `radius >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    /// Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius: radius.max(0.0) }
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
