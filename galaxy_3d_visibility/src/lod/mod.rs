//! Level of detail — distance thresholds and the per-frame LOD tracker.

mod manager;
mod settings;

pub use manager::{LodEntry, LodManager};
pub use settings::{LodSettings, MAX_LOD_LEVELS};
