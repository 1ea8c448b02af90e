//! # Error Types
//!
//! This module defines error types used throughout the estampa library.
//!
//! Most printer directives never fail: out-of-range parameters are clamped
//! or the directive is skipped, the same way the printer itself tolerates
//! them. Only operations that could desynchronize the printer's command
//! parser (a raster image with a bad geometry) or that touch the outside
//! world (files, JSON jobs) return an error.

use thiserror::Error;

/// Main error type for estampa operations
#[derive(Debug, Error)]
pub enum EstampaError {
    /// Image dimensions are non-positive, too large for the raster header,
    /// or the pixel buffer is shorter than `width * height`
    #[error("Invalid image geometry: {width}x{height} with {len} pixel bytes")]
    InvalidImageGeometry {
        width: usize,
        height: usize,
        len: usize,
    },

    /// Image decoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Malformed print job
    #[error("Job error: {0}")]
    Job(String),

    /// JSON job parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for estampa operations
pub type Result<T> = std::result::Result<T, EstampaError>;
