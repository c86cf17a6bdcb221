/*!
# Galaxy 3D Visibility

Per-frame visibility for the Galaxy 3D engine: decides which scene objects
reach each render pass and in what form.

## Architecture

- **culling**: Bounding volumes, frustum planes and the visibility tests
- **lod**: Distance-based level-of-detail tracking
- **view**: Main-view draw lists, shadow views and the frame pipeline
- **scene**: Objects, meshes, lights and depth targets the pipeline reads
- **config**: Visibility settings (RON / TOML)

Everything is rebuilt from scratch each frame; the only state carried
between frames is the LOD tracker.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod culling;
pub mod camera;
pub mod scene;
pub mod lod;
pub mod view;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod config {
        pub use crate::config::*;
    }

    pub mod culling {
        pub use crate::culling::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod lod {
        pub use crate::lod::*;
    }

    pub mod view {
        pub use crate::view::*;
    }
}

// Re-export math library at crate root
pub use glam;
