//! PDF to page image rendering.
//!
//! [`PageRenderer`] is the seam between a document and the directory of page
//! images the batch driver consumes. [`ImageMagick`] shells out to the
//! `convert` command.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::BatchError;

/// File name pattern of rendered pages; `%d` is the 0-based page index.
pub const PAGE_PATTERN: &str = "p-%d.png";

/// Renders every page of a document into a directory of images.
///
/// Implementations must name the files so that
/// [`list_pages`](crate::pages::list_pages) can order them, i.e. a page
/// number at [`PAGE_NUMBER_OFFSET`](crate::pages::PAGE_NUMBER_OFFSET).
pub trait PageRenderer {
    /// Render `document` at `dpi` into the existing directory `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Render`] if the document could not be rendered.
    fn render(&self, document: &Path, dpi: u32, dest: &Path) -> Result<(), BatchError>;
}

/// Renderer backed by ImageMagick's `convert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMagick {
    /// Program to run.
    pub program: PathBuf,
}

impl Default for ImageMagick {
    fn default() -> Self {
        Self {
            program: PathBuf::from("convert"),
        }
    }
}

impl ImageMagick {
    /// Use `program` instead of `convert` from `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the command line for rendering `document` into `dest`.
    pub fn command(&self, document: &Path, dpi: u32, dest: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-density")
            .arg(dpi.to_string())
            .arg("-depth")
            .arg("8")
            .arg(document)
            .arg(dest.join(PAGE_PATTERN));
        cmd
    }
}

impl PageRenderer for ImageMagick {
    fn render(&self, document: &Path, dpi: u32, dest: &Path) -> Result<(), BatchError> {
        info!(
            document = %document.display(),
            dpi,
            "converting pdf to images, this can take a long time"
        );
        let output = self
            .command(document, dpi, dest)
            .output()
            .map_err(|e| {
                BatchError::Render(format!(
                    "failed to execute {}: {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BatchError::Render(format!(
                "{} failed ({}): {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        debug!(dest = %dest.display(), "rendering finished");
        Ok(())
    }
}
