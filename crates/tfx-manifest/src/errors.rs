use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during manifest load, transform, and save
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("App manifest not found: {}", .0.display())]
    NotFound(PathBuf),
}
