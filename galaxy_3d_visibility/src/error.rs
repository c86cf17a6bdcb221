//! Error types for the Galaxy3D visibility pipeline
//!
//! Per-frame building never fails: malformed scene data is logged and
//! excluded. These errors cover the fallible edges of the crate:
//! configuration loading, raw light descriptors, and input validation.

/// Result type for Galaxy3D visibility operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D visibility errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Settings failed validation (zero batch size, etc.)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Settings file could not be read or written
    #[error("Configuration IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Settings file content could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// Settings could not be serialized
    #[error("Configuration serialization error: {0}")]
    ConfigSerialize(String),

    /// Settings file extension is neither `.ron` nor `.toml`
    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),

    /// Raw light type tag does not name a known light kind
    #[error("Unknown light type: {0}")]
    UnknownLightType(u32),

    /// Bounding box with low > high on some axis, or non-finite corners
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// LOD thresholds that are not sorted ascending or not finite
    #[error("Invalid LOD settings: {0}")]
    InvalidLodSettings(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
