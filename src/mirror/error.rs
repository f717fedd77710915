//! Error types for the mirror module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a mirror run before or between targets.
///
/// Per-file probe and transfer failures are never surfaced here; those are
/// contained in the run loop and recorded as
/// [`FileOutcome::Failed`](super::FileOutcome::Failed).
#[derive(Debug, Error)]
pub enum MirrorError {
    /// A target URL could not be derived from the base URL.
    #[error("cannot derive URL for {file_name}: {source}")]
    Url {
        /// The file name being joined onto the base URL.
        file_name: String,
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// A local directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl MirrorError {
    /// Creates a URL derivation error.
    pub fn url(file_name: impl Into<String>, source: url::ParseError) -> Self {
        Self::Url {
            file_name: file_name.into(),
            source,
        }
    }

    /// Creates a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }
}
