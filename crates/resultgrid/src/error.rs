//! Error types for the search session and the CLI.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while running a search or loading its inputs.
///
/// Failures of the query backend are not errors here: they are shown to the
/// user as a one-row error table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No surface matches the requested name.
    #[error("no surface named '{0}'")]
    UnknownSurface(String),

    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read from stdin.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    /// Result records could not be decoded.
    #[error("invalid result records: {0}")]
    Records(#[from] serde_json::Error),

    /// Configuration could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;
