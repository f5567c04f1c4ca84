//! Name types used by extension registration.

use super::ExtensionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Developer name of a registration record.
///
/// Used as both `DeveloperName` and `MasterLabel`. Only presence is checked
/// locally; naming rules and uniqueness belong to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisteredName(String);

impl RegisteredName {
    /// Creates a registered name, keeping the value exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionDomainError::EmptyRegisteredName`] when the value is
    /// empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, ExtensionDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ExtensionDomainError::EmptyRegisteredName);
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RegisteredName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RegisteredName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Candidate extension point name (for example `Commerce_Domain_Tax_CartCalculator`).
///
/// Validity is decided by the remote picklist on every call, so the value is
/// kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionPointName(String);

impl ExtensionPointName {
    /// Wraps a candidate extension point name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionPointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity (org username or alias) that remote calls run as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActingIdentity(String);

impl ActingIdentity {
    /// Wraps a resolved session identity.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActingIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
