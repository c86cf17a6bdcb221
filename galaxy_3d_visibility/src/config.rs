//! Visibility settings
//!
//! Runtime toggles for the pipeline (frustum culling per view kind, render
//! list sorting, forced LOD) and the per-pass instance batch limits. Can be
//! loaded from and saved to `.ron` or `.toml` files.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::view::RenderPassKind;

/// Maximum instances per instanced draw, per render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceBatchLimits {
    pub z_prepass: usize,
    pub gbuffer: usize,
    pub shadow_depth: usize,
}

impl InstanceBatchLimits {
    /// Default per-pass cap, matching the size of the instance uniform arrays
    pub const DEFAULT_MAX_INSTANCES: usize = 64;

    pub fn for_pass(&self, pass: RenderPassKind) -> usize {
        match pass {
            RenderPassKind::ZPrePass => self.z_prepass,
            RenderPassKind::GBuffer => self.gbuffer,
            RenderPassKind::ShadowDepth => self.shadow_depth,
        }
    }
}

impl Default for InstanceBatchLimits {
    fn default() -> Self {
        Self {
            z_prepass: Self::DEFAULT_MAX_INSTANCES,
            gbuffer: Self::DEFAULT_MAX_INSTANCES,
            shadow_depth: Self::DEFAULT_MAX_INSTANCES,
        }
    }
}

/// Pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilitySettings {
    /// Frustum-cull the main camera's opaque list
    pub frustum_cull_main_view: bool,
    /// Frustum-cull shadow casters per light and cull point lights against the camera
    pub frustum_cull_local_lights: bool,
    /// Sort culled render lists by mesh (built-ins first)
    pub sort_render_lists: bool,
    /// When set, every LOD query returns this level
    pub forced_lod_level: Option<usize>,
    pub instance_batch_limits: InstanceBatchLimits,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            frustum_cull_main_view: true,
            frustum_cull_local_lights: true,
            sort_render_lists: false,
            forced_lod_level: None,
            instance_batch_limits: InstanceBatchLimits::default(),
        }
    }
}

/// On-disk settings format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Ok(ConfigFormat::Ron),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(Error::UnsupportedConfigFormat(path.display().to_string())),
        }
    }
}

impl VisibilitySettings {
    /// Check that every batch limit is non-zero
    pub fn validate(&self) -> Result<()> {
        let limits = &self.instance_batch_limits;
        for (name, value) in [
            ("z_prepass", limits.z_prepass),
            ("gbuffer", limits.gbuffer),
            ("shadow_depth", limits.shadow_depth),
        ] {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{} batch size is 0", name)));
            }
        }
        Ok(())
    }

    pub fn from_str_with_format(contents: &str, format: ConfigFormat) -> Result<Self> {
        let settings: Self = match format {
            ConfigFormat::Ron => ron::from_str(contents)
                .map_err(|e| Error::ConfigParse(e.to_string()))?,
            ConfigFormat::Toml => toml::from_str(contents)
                .map_err(|e| Error::ConfigParse(e.to_string()))?,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_string_with_format(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| Error::ConfigSerialize(e.to_string())),
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::ConfigSerialize(e.to_string())),
        }
    }

    /// Load and validate settings from a `.ron` or `.toml` file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&contents, format)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = self.to_string_with_format(format)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
