//! Camera module — the main-view camera read by the pipeline.

mod camera;

pub use camera::Camera;
