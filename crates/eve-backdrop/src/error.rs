//! Error types for the backdrop engine.
//!
//! The animation loops never fail; these cover configuration and content
//! loading, which come from JSON supplied by the host.

use thiserror::Error;

/// Errors surfaced by fallible backdrop operations.
#[derive(Error, Debug)]
pub enum BackdropError {
    /// JSON could not be parsed.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// Snake population or motion parameters are inconsistent.
    #[error("invalid snake config: {0}")]
    InvalidSnakeConfig(String),

    /// A timing parameter must be strictly positive.
    #[error("invalid {name}: {value} (must be > 0)")]
    InvalidTiming { name: &'static str, value: f32 },

    /// Site manifest failed validation.
    #[error("invalid site manifest: {0}")]
    InvalidManifest(String),

    /// Path does not map to an enabled route.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// No documentation section has this id.
    #[error("unknown documentation tab: {0}")]
    UnknownDocTab(String),
}

pub type Result<T> = std::result::Result<T, BackdropError>;
