//! Message catalog port for user-facing text.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Keys of the messages the registration flow emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MessageKey {
    /// Progress line logged before class resolution.
    RetrievingApexClass,
    /// The Apex class could not be resolved.
    ApexClassNotFound,
    /// The extension point name is not in the remote picklist.
    InvalidExtensionPoint,
    /// No registered extension name was supplied.
    UndefinedName,
    /// The remote store rejected the registration.
    RegistrationRejected,
    /// The registration create call failed in transport.
    RegistrationWriteFailed,
    /// The created registration could not be read back.
    ProjectionMissing,
    /// A gateway call failed outside the write path.
    GatewayFailure,
    /// Confirmation logged after a successful registration.
    RegistrationSaved,
}

impl MessageKey {
    /// Returns the stable catalog key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RetrievingApexClass => "extension.register.retrievingApexClass",
            Self::ApexClassNotFound => "extension.register.errApexClass",
            Self::InvalidExtensionPoint => "extension.register.errEPN",
            Self::UndefinedName => "extension.register.undefinedName",
            Self::RegistrationRejected => "extension.register.error",
            Self::RegistrationWriteFailed => "extension.register.errWrite",
            Self::ProjectionMissing => "extension.register.errProjection",
            Self::GatewayFailure => "extension.register.errGateway",
            Self::RegistrationSaved => "extension.register.saved",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves message keys to rendered text.
///
/// Implementations are injected into services; there is no process-wide
/// catalog.
pub trait MessageResolver: Send + Sync {
    /// Renders `key` with the named values in `context`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError`] when the key is unknown or rendering fails.
    fn resolve(&self, key: MessageKey, context: &Map<String, Value>) -> Result<String, MessageError>;
}

/// Errors returned by message resolvers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageError {
    /// The catalog has no template for the key.
    #[error("no message registered for key {0}")]
    UnknownKey(MessageKey),

    /// The template failed to render.
    #[error("failed to render message {key}: {reason}")]
    Render {
        /// Key being rendered.
        key: MessageKey,
        /// Renderer error text.
        reason: String,
    },
}
