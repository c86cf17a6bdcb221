/// View culling strategies.
///
/// A ViewCuller filters a candidate list of objects against one view's
/// frustum. The builders pick a strategy per view from the settings:
/// frustum culling when enabled, pass-through otherwise.

use crate::scene::{ObjectKey, Scene};
use super::frustum::FrustumPlaneSet;
use super::visibility::box_visible_from_frustum;

/// Output of one cull: survivors in input order plus the rejected count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CullResult {
    pub visible: Vec<ObjectKey>,
    pub culled: usize,
}

/// Strategy for filtering candidates against a frustum.
///
/// Candidates must be valid keys into `scene`; unknown keys are dropped
/// and counted as culled.
pub trait ViewCuller: Send + Sync {
    fn cull(
        &mut self,
        frustum: &FrustumPlaneSet,
        scene: &Scene,
        candidates: &[ObjectKey],
    ) -> CullResult;
}

/// Keeps every candidate (culling disabled).
pub struct PassThroughCuller;

impl ViewCuller for PassThroughCuller {
    fn cull(
        &mut self,
        _frustum: &FrustumPlaneSet,
        scene: &Scene,
        candidates: &[ObjectKey],
    ) -> CullResult {
        let visible: Vec<ObjectKey> = candidates
            .iter()
            .copied()
            .filter(|key| scene.object(*key).is_some())
            .collect();
        let culled = candidates.len() - visible.len();
        CullResult { visible, culled }
    }
}

/// Tests each object's world-space aggregate box against the frustum.
pub struct FrustumCuller;

impl ViewCuller for FrustumCuller {
    fn cull(
        &mut self,
        frustum: &FrustumPlaneSet,
        scene: &Scene,
        candidates: &[ObjectKey],
    ) -> CullResult {
        let visible: Vec<ObjectKey> = candidates
            .iter()
            .copied()
            .filter(|key| {
                scene.object(*key).is_some_and(|object| {
                    box_visible_from_frustum(frustum, &object.world_bounding_box())
                })
            })
            .collect();
        let culled = candidates.len() - visible.len();
        CullResult { visible, culled }
    }
}

/// Strategy matching a culling toggle
pub fn culler_for(frustum_culling: bool) -> Box<dyn ViewCuller> {
    if frustum_culling {
        Box::new(FrustumCuller)
    } else {
        Box::new(PassThroughCuller)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
