//! LOD distance thresholds and level lookup.

use crate::error::{Error, Result};
use crate::scene::BuiltinGeometry;

/// Maximum number of LOD levels a mesh may declare thresholds for
pub const MAX_LOD_LEVELS: usize = 6;

/// Distance thresholds (world units, ascending) for one mesh.
///
/// Level `i` applies while the viewer distance is below `thresholds[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LodSettings {
    distance_thresholds: Vec<f32>,
}

impl LodSettings {
    /// Validated settings: finite, non-negative, ascending, at most
    /// `MAX_LOD_LEVELS` entries.
    pub fn new(distance_thresholds: Vec<f32>) -> Result<Self> {
        if distance_thresholds.len() > MAX_LOD_LEVELS {
            return Err(Error::InvalidLodSettings(format!(
                "{} thresholds exceed the limit of {}",
                distance_thresholds.len(),
                MAX_LOD_LEVELS
            )));
        }
        if distance_thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(Error::InvalidLodSettings(format!(
                "non-finite or negative threshold in {:?}", distance_thresholds
            )));
        }
        if distance_thresholds.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidLodSettings(format!(
                "thresholds not ascending: {:?}", distance_thresholds
            )));
        }
        Ok(Self { distance_thresholds })
    }

    pub fn distance_thresholds(&self) -> &[f32] {
        &self.distance_thresholds
    }

    /// Level for a squared viewer distance.
    ///
    /// Returns the first index whose squared threshold exceeds
    /// `square_distance`, or 0 when the distance is beyond every threshold
    /// (or there are none).
    pub fn lod_from_square_distance(square_distance: f32, thresholds: &[f32]) -> usize {
        thresholds
            .iter()
            .position(|t| square_distance < t * t)
            .unwrap_or(0)
    }

    /// Same lookup with a plain (non-squared) distance.
    pub fn lod_from_distance(distance: f32, thresholds: &[f32]) -> usize {
        thresholds
            .iter()
            .position(|t| distance < *t)
            .unwrap_or(0)
    }

    pub fn level_for_square_distance(&self, square_distance: f32) -> usize {
        Self::lod_from_square_distance(square_distance, &self.distance_thresholds)
    }

    /// Default thresholds for the built-in meshes that ship with LOD levels.
    pub fn builtin(geometry: BuiltinGeometry) -> Option<LodSettings> {
        let thresholds: &[f32] = match geometry {
            BuiltinGeometry::Cone => &[100.0, 300.0, 400.0, 600.0, 800.0],
            BuiltinGeometry::Grid => &[70.0, 150.0, 400.0, 700.0, 1000.0],
            BuiltinGeometry::Sphere => &[80.0, 220.0, 400.0, 800.0, 1000.0],
            BuiltinGeometry::Cylinder => &[70.0, 150.0, 300.0, 700.0, 1000.0],
            _ => return None,
        };
        Some(LodSettings { distance_thresholds: thresholds.to_vec() })
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
