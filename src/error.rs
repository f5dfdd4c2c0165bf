//! Error types for descriptor generation.
//!
//! A single filesystem failure anywhere in the traversal aborts the whole
//! generation; no partial document is ever produced.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all generator operations
#[derive(Error, Debug)]
pub enum Error {
    /// A directory could not be listed during traversal
    #[error("failed to list directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that could not be read
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// A directory entry could not be classified as file or directory
    #[error("failed to inspect {}: {source}", path.display())]
    Probe {
        /// Entry that could not be inspected
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// A traversal task panicked or was aborted
    #[error("directory traversal task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// IO errors outside the traversal (config reading, output writing)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON configuration parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid or incomplete configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}
