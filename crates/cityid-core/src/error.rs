// crates/cityid-core/src/error.rs

use thiserror::Error;

/// Convenient alias used across the crate.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// All the ways a registry call can fail.
///
/// Validation problems are detected before any file is touched; a
/// lookup never partially executes. "No matches" is not an error, it
/// is an empty `Ok` result.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Bad caller input: unknown matching mode, malformed country code
    /// length, non-letter shard initial.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A shard line did not decode into the expected 5 fields. The
    /// dataset is corrupt; the whole lookup fails.
    #[error("malformed shard line: {0}")]
    Parse(String),

    /// A shard file is missing at the expected path.
    #[error("{0}")]
    NotFound(String),

    /// Any other read/write failure while streaming a shard.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream city list could not be parsed (builder only).
    #[cfg(feature = "builder")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream city list could not be downloaded (builder only).
    #[cfg(feature = "builder")]
    #[error("download failed: {0}")]
    Fetch(#[from] reqwest::Error),
}
