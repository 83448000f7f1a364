//! Error types shared across Obscura crates.

use std::path::PathBuf;

/// Top-level error type for Obscura operations.
#[derive(Debug, thiserror::Error)]
pub enum ObscuraError {
    #[error("Capture error: {message}")]
    Capture { message: String },

    #[error("Processing error: {message}")]
    Processing { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ObscuraError.
pub type ObscuraResult<T> = Result<T, ObscuraError>;

impl ObscuraError {
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture {
            message: msg.into(),
        }
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }
}
