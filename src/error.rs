//! Error types for screenshot-eval operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for screenshot-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or analyzing a screenshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pixel buffer handed to the analysis core is malformed.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the buffer.
        reason: String,
    },

    /// Failed to load or decode an image file.
    #[error("Image load failed: {path}: {reason}")]
    ImageLoad {
        /// Path to the image that failed to load.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Screenshot auto-discovery failed.
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
