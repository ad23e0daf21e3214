//! The errors produced while exporting word lists.
use std::{io, path::PathBuf};

use thiserror::Error;

/// Exporting the word lists failed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ExportError {
    /// The word lists could not be encoded as JSON.
    #[error("failed to serialize word lists: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The output file could not be created or written.
    #[error("failed to write to {}: {}", .0.display(), .1)]
    FailedToWrite(PathBuf, io::Error),
    /// A word list file could not be read.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    FailedToRead(PathBuf, io::Error),
}
