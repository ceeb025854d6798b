//! Error types for the Bloom filter crate

use thiserror::Error;

/// Errors that can occur while building a Bloom filter
///
/// Construction is the only fallible step. Once a filter exists, `insert`
/// and `find` are total over any byte slice.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl FilterError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        FilterError::InvalidConfiguration(reason.into())
    }
}
