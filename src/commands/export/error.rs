//! Error types for the export command.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The collaborator is missing, unauthenticated, or exited with a failure status.
    #[error("`{command}` failed: {message}")]
    ExternalTool { command: String, message: String },

    /// The listing response was not the expected JSON.
    #[error("Failed to parse output of `{command}`: {message}")]
    Parse { command: String, message: String },

    #[error("Output directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = anyhow::Result<T>;
