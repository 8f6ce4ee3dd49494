//! Error types for image stamping.
//!
//! Every per-image operation returns [`StampError`]. Errors are never retried
//! inside the core; the batch runner decides whether to skip and continue.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the raster, compositing and scoring operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StampError {
    /// Source image or logo is unreadable, corrupt or in an unsupported format
    #[error("Failed to decode image {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// Output could not be written
    #[error("Failed to encode image {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    /// Out-of-range crop/pad/scale/overlay argument
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// Contrast scorer found no pixels to sample
    #[error("Insufficient samples for {strategy} contrast scoring")]
    InsufficientSamples { strategy: &'static str },
}

impl StampError {
    pub fn decode_failed(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        StampError::Decode {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn encode_failed(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        StampError::Encode {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn invalid_param(param: impl Into<String>, message: impl Into<String>) -> Self {
        StampError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn insufficient_samples(strategy: &'static str) -> Self {
        StampError::InsufficientSamples { strategy }
    }

    /// Whether the failure depends on the image content rather than on
    /// configuration or the output filesystem.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            StampError::Decode { .. } | StampError::InsufficientSamples { .. }
        )
    }
}
