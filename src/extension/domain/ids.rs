//! Identifier types for the extension domain.

use super::ExtensionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote record identifier (for example `01p5e000000AbCdAAK`).
///
/// The remote store owns identifier generation; this type only guarantees the
/// value is non-empty and alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a validated record identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionDomainError::EmptyRecordId`] when the value is blank
    /// or [`ExtensionDomainError::InvalidRecordId`] when it contains
    /// characters outside `[A-Za-z0-9]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ExtensionDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ExtensionDomainError::EmptyRecordId);
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ExtensionDomainError::InvalidRecordId(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
