//! Core error types for the fee lookup.
//!
//! Searching and joining never fail; an empty result is a normal outcome.
//! Errors only come from the loading edge, when a dataset cannot be read or
//! decoded. Loader-specific errors (I/O, JSON) are converted into these types
//! by the `dataset` crate.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the lookup.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset operation failed: {0}")]
    Dataset(#[from] DatasetError),
}

/// Loader-agnostic error type for dataset access.
///
/// Details are carried as strings so this crate does not depend on the
/// loader's I/O or parsing libraries.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset source does not exist.
    #[error("Dataset not found: {0}")]
    NotFound(String),

    /// The dataset source exists but could not be read.
    #[error("Failed to read dataset: {0}")]
    ReadFailed(String),

    /// The dataset was read but its content could not be decoded.
    #[error("Failed to parse dataset: {0}")]
    ParseFailed(String),
}
