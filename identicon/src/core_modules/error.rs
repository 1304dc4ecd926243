use std::path::PathBuf;

use image::ImageError;

/// The only failure in the identicon pipeline: the rendered image could not be
/// persisted. Every stage before the write is total.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to write identicon to {}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl RenderError {
    pub fn path(&self) -> &PathBuf {
        match self {
            RenderError::OutputWriteFailure { path, .. } => path,
        }
    }
}
