//! Error types for blockbuilder

use thiserror::Error;

use crate::voxel::serialize::ImportError;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid data: {0}")]
    MalformedInput(#[from] ImportError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
