/// Lights and their shadow-view transforms.
///
/// Each light kind carries only the data it uses. Projections follow the
/// right-handed, [-w, w] clip-depth convention the frustum extraction
/// expects.

use glam::{Mat4, Vec3};
use crate::culling::BoundingSphere;
use crate::error::{Error, Result};

/// Index of a light in its scene, in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(pub usize);

/// Light kind tag, as carried by external light descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    Point,
    Spot,
    Directional,
}

impl LightType {
    /// Decode an external light type tag (0 = point, 1 = spot, 2 = directional)
    pub fn from_raw(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(LightType::Point),
            1 => Ok(LightType::Spot),
            2 => Ok(LightType::Directional),
            other => Err(Error::UnknownLightType(other)),
        }
    }
}

/// Kind-specific light data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Point {
        position: Vec3,
        range: f32,
        near: f32,
        far: f32,
    },
    Spot {
        position: Vec3,
        direction: Vec3,
        up: Vec3,
        angle_degrees: f32,
        near: f32,
        far: f32,
    },
    Directional {
        /// Direction the light travels
        direction: Vec3,
        /// Distance of the shadow camera from the origin, against `direction`
        distance: f32,
        viewport_width: f32,
        viewport_height: f32,
        near: f32,
        far: f32,
    },
}

// ===== CUBEMAP FACES =====

/// Point-light shadow cubemap face, in face-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubemapFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubemapFace {
    pub const COUNT: usize = 6;

    pub const ALL: [CubemapFace; Self::COUNT] = [
        CubemapFace::PositiveX,
        CubemapFace::NegativeX,
        CubemapFace::PositiveY,
        CubemapFace::NegativeY,
        CubemapFace::PositiveZ,
        CubemapFace::NegativeZ,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn look_direction(self) -> Vec3 {
        match self {
            CubemapFace::PositiveX => Vec3::X,
            CubemapFace::NegativeX => Vec3::NEG_X,
            CubemapFace::PositiveY => Vec3::Y,
            CubemapFace::NegativeY => Vec3::NEG_Y,
            CubemapFace::PositiveZ => Vec3::Z,
            CubemapFace::NegativeZ => Vec3::NEG_Z,
        }
    }

    pub fn up(self) -> Vec3 {
        match self {
            CubemapFace::PositiveY => Vec3::NEG_Z,
            CubemapFace::NegativeY => Vec3::Z,
            _ => Vec3::Y,
        }
    }

    /// View matrix looking down this face from `position`
    pub fn view_matrix(self, position: Vec3) -> Mat4 {
        Mat4::look_at_rh(position, position + self.look_direction(), self.up())
    }
}

// ===== LIGHT =====

/// A scene light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub casts_shadow: bool,
    pub enabled: bool,
}

/// Look-at that tolerates a zero direction or an up vector parallel to it
fn look_along(eye: Vec3, direction: Vec3, up: Vec3) -> Mat4 {
    let forward = direction.try_normalize().unwrap_or(Vec3::NEG_Y);
    let up = match up.try_normalize() {
        Some(up) if forward.dot(up).abs() < 0.999 => up,
        _ if forward.dot(Vec3::Y).abs() < 0.999 => Vec3::Y,
        _ => Vec3::Z,
    };
    Mat4::look_at_rh(eye, eye + forward, up)
}

impl Light {
    pub fn new(kind: LightKind) -> Self {
        Self { kind, casts_shadow: true, enabled: true }
    }

    pub fn point(position: Vec3, range: f32) -> Self {
        Self::new(LightKind::Point { position, range, near: 0.1, far: range })
    }

    pub fn spot(position: Vec3, direction: Vec3, angle_degrees: f32, range: f32) -> Self {
        Self::new(LightKind::Spot {
            position,
            direction,
            up: Vec3::Y,
            angle_degrees,
            near: 0.1,
            far: range,
        })
    }

    pub fn directional(direction: Vec3, distance: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self::new(LightKind::Directional {
            direction,
            distance,
            viewport_width,
            viewport_height,
            near: 0.1,
            far: distance * 2.0,
        })
    }

    pub fn with_shadows(mut self, casts_shadow: bool) -> Self {
        self.casts_shadow = casts_shadow;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn light_type(&self) -> LightType {
        match self.kind {
            LightKind::Point { .. } => LightType::Point,
            LightKind::Spot { .. } => LightType::Spot,
            LightKind::Directional { .. } => LightType::Directional,
        }
    }

    /// Takes part in shadow-view construction
    pub fn is_shadow_caster(&self) -> bool {
        self.enabled && self.casts_shadow
    }

    /// World position (`None` for directional lights)
    pub fn position(&self) -> Option<Vec3> {
        match self.kind {
            LightKind::Point { position, .. } | LightKind::Spot { position, .. } => Some(position),
            LightKind::Directional { .. } => None,
        }
    }

    /// Influence sphere of a point light
    pub fn range_sphere(&self) -> Option<BoundingSphere> {
        match self.kind {
            LightKind::Point { position, range, .. } => Some(BoundingSphere::new(position, range)),
            _ => None,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.kind {
            LightKind::Point { near, far, .. } => {
                Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, near, far)
            }
            LightKind::Spot { angle_degrees, near, far, .. } => {
                Mat4::perspective_rh_gl(angle_degrees.to_radians(), 1.0, near, far)
            }
            LightKind::Directional { viewport_width, viewport_height, near, far, .. } => {
                if viewport_width < 1.0 {
                    return Mat4::IDENTITY;
                }
                let (hw, hh) = (viewport_width * 0.5, viewport_height * 0.5);
                Mat4::orthographic_rh_gl(-hw, hw, -hh, hh, near, far)
            }
        }
    }

    /// View matrix. Point lights use `CubemapFace::PositiveX` here; see
    /// `face_view_projection` for the other faces.
    pub fn view_matrix(&self) -> Mat4 {
        match self.kind {
            LightKind::Point { position, .. } => CubemapFace::PositiveX.view_matrix(position),
            LightKind::Spot { position, direction, up, .. } => look_along(position, direction, up),
            LightKind::Directional { direction, distance, viewport_width, .. } => {
                if viewport_width < 1.0 {
                    return Mat4::IDENTITY;
                }
                let forward = direction.try_normalize().unwrap_or(Vec3::NEG_Y);
                look_along(-forward * distance, forward, Vec3::Y)
            }
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// View-projection of one point-light cubemap face (`None` for other kinds)
    pub fn face_view_projection(&self, face: CubemapFace) -> Option<Mat4> {
        match self.kind {
            LightKind::Point { position, .. } => {
                Some(self.projection_matrix() * face.view_matrix(position))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
