//! Error types for the batch layer.
//!
//! Uses [`thiserror`] for the fatal failures of a run: rendering, the output
//! tree, and record writes. Page-level problems are not errors here; they are
//! reported as [`SkipReason`](pagecut_core::SkipReason)s.

use std::path::PathBuf;

use pagecut_core::ConfigError;
use thiserror::Error;

/// Fatal error of a pagecut run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Filesystem error while setting up or writing the output tree.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error encoding a record image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The external page renderer failed.
    #[error("render error: {0}")]
    Render(String),

    /// The output root exists from an earlier run.
    #[error("output folder {} already exists, delete it first", .0.display())]
    OutputExists(PathBuf),

    /// Preset lookup or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
