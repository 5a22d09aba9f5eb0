//! Loader-specific error types.
//!
//! This module wraps I/O and JSON errors and converts them to the
//! loader-agnostic error types defined in `tradefee_core`.

use std::path::PathBuf;

use thiserror::Error;
use tradefee_core::errors::{DatasetError, Error};

/// Errors raised while reading or decoding a dataset.
///
/// These errors are internal to this crate and are converted to
/// `tradefee_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        let message = err.to_string();
        match err {
            LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Error::Dataset(DatasetError::NotFound(message))
            }
            LoadError::Io { .. } => Error::Dataset(DatasetError::ReadFailed(message)),
            LoadError::Json { .. } => Error::Dataset(DatasetError::ParseFailed(message)),
        }
    }
}
