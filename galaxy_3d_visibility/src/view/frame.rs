/// Per-frame context: settings in effect and statistics gathered while
/// building the views. One context is created (or reset) per frame and
/// threaded through every builder; nothing here is global.

use crate::config::VisibilitySettings;

/// Counters gathered while building one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Objects flagged for rendering this frame
    pub num_scene_objects: usize,
    /// Objects dropped from the main view by frustum culling
    pub main_view_culled: usize,
    /// Caster tests rejected across all shadow views (point faces counted individually)
    pub shadow_casters_culled: usize,
    /// Point lights dropped because they cannot affect the camera view
    pub lights_culled: usize,
    pub num_point_lights: usize,
    pub num_spot_lights: usize,
    pub has_directional_light: bool,
    /// LOD levels that changed during this frame's update
    pub lod_changes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FrameContext {
    settings: VisibilitySettings,
    stats: FrameStats,
    frame_index: u64,
}

impl FrameContext {
    pub fn new(settings: VisibilitySettings) -> Self {
        Self { settings, stats: FrameStats::default(), frame_index: 0 }
    }

    pub fn settings(&self) -> &VisibilitySettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut VisibilitySettings {
        &mut self.settings
    }

    pub fn forced_lod_level(&self) -> Option<usize> {
        self.settings.forced_lod_level
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut FrameStats {
        &mut self.stats
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advance to the next frame: clears the statistics, keeps the settings.
    pub fn begin_frame(&mut self) {
        self.frame_index += 1;
        self.stats = FrameStats::default();
    }
}
