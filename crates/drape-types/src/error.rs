//! Error types for drape.
//!
//! All crates return `DrapeResult<T>` from fallible operations.
//! Numeric degeneracies inside the physics and rasterizer (zero-length
//! constraints, zero-area triangles, zero vectors) are guarded in place
//! and never surface here.

use thiserror::Error;

/// Unified error type for drape.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Cloth grid dimensions or spacing are unusable.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or writing an image failed.
    #[error("Image error: {0}")]
    Image(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
