//! Error types for extension domain validation.

use thiserror::Error;

/// Errors returned while constructing extension domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtensionDomainError {
    /// A record identifier is empty after trimming.
    #[error("record identifier must not be empty")]
    EmptyRecordId,

    /// A record identifier contains characters outside `[A-Za-z0-9]`.
    #[error("record identifier '{0}' contains non-alphanumeric characters")]
    InvalidRecordId(String),

    /// The registered extension name is empty after trimming.
    #[error("registered extension name must not be empty")]
    EmptyRegisteredName,
}
