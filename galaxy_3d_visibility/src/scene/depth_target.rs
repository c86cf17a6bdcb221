/// Shadow depth targets assigned to lights.
///
/// The render-pass layer owns the actual GPU targets; the visibility
/// pipeline only needs to know whether a light has one and which.

use rustc_hash::FxHashMap;
use super::light::LightId;

/// Opaque handle to a depth render target (or cubemap for point lights)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthTargetId(pub u32);

/// Lookup of the depth target a shadow-casting light renders into.
pub trait DepthTargetRegistry {
    fn depth_target(&self, light: LightId) -> Option<DepthTargetId>;
}

/// Map-backed registry
#[derive(Debug, Clone, Default)]
pub struct DepthTargetTable {
    targets: FxHashMap<LightId, DepthTargetId>,
}

impl DepthTargetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a target, returning the previous one if any
    pub fn assign(&mut self, light: LightId, target: DepthTargetId) -> Option<DepthTargetId> {
        self.targets.insert(light, target)
    }

    pub fn release(&mut self, light: LightId) -> Option<DepthTargetId> {
        self.targets.remove(&light)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl DepthTargetRegistry for DepthTargetTable {
    fn depth_target(&self, light: LightId) -> Option<DepthTargetId> {
        self.targets.get(&light).copied()
    }
}
