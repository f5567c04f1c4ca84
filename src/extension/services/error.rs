//! Registration error taxonomy and orchestration stages.

use crate::extension::{
    domain::{ExtensionPointName, RegisteredName},
    ports::{GatewayError, MessageKey},
};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Step of the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationStage {
    /// Looking up the Apex class identifier.
    ResolvingClass,
    /// Checking the extension point against the remote picklist.
    ValidatingExtensionPoint,
    /// Checking that a registered name was supplied.
    CheckingName,
    /// Creating the registration record.
    Writing,
    /// Reading the created record back.
    Projecting,
}

impl RegistrationStage {
    /// Returns the stage name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResolvingClass => "resolving_class",
            Self::ValidatingExtensionPoint => "validating_extension_point",
            Self::CheckingName => "checking_name",
            Self::Writing => "writing",
            Self::Projecting => "projecting",
        }
    }
}

impl fmt::Display for RegistrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of a registration call.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// The Apex class lookup failed or matched nothing.
    #[error("Apex class '{class_name}' could not be retrieved: {reason}")]
    ClassNotFound {
        /// Requested class name.
        class_name: String,
        /// Remote error text or lookup outcome.
        reason: String,
    },

    /// The extension point name is not a valid picklist value.
    #[error("'{extension_point}' is not a valid extension point name")]
    InvalidExtensionPoint {
        /// Rejected extension point name.
        extension_point: ExtensionPointName,
    },

    /// No registered extension name was supplied.
    #[error("a registered extension name is required")]
    MissingName,

    /// The remote store refused the registration record.
    #[error("failed to register extension '{developer_name}': {reason}")]
    RegistrationConflict {
        /// Attempted developer name.
        developer_name: RegisteredName,
        /// Remote error code, when reported.
        error_code: Option<String>,
        /// Remote error text.
        reason: String,
    },

    /// The create call failed in transport.
    #[error("failed to write registration '{developer_name}': {source}")]
    RegistrationWrite {
        /// Attempted developer name.
        developer_name: RegisteredName,
        /// Underlying gateway failure.
        #[source]
        source: GatewayError,
    },

    /// The record was created but could not be read back.
    #[error("registration '{developer_name}' was written but could not be read back")]
    ProjectionMissing {
        /// Developer name that was written.
        developer_name: RegisteredName,
    },

    /// A query failed outside class resolution.
    #[error("remote call failed while {stage}: {source}")]
    Gateway {
        /// Stage that issued the call.
        stage: RegistrationStage,
        /// Underlying gateway failure.
        #[source]
        source: GatewayError,
    },
}

impl RegistrationError {
    /// Returns the stage the failure occurred in.
    #[must_use]
    pub const fn stage(&self) -> RegistrationStage {
        match self {
            Self::ClassNotFound { .. } => RegistrationStage::ResolvingClass,
            Self::InvalidExtensionPoint { .. } => RegistrationStage::ValidatingExtensionPoint,
            Self::MissingName => RegistrationStage::CheckingName,
            Self::RegistrationConflict { .. } | Self::RegistrationWrite { .. } => {
                RegistrationStage::Writing
            }
            Self::ProjectionMissing { .. } => RegistrationStage::Projecting,
            Self::Gateway { stage, .. } => *stage,
        }
    }

    /// Returns the catalog key describing this failure.
    #[must_use]
    pub const fn message_key(&self) -> MessageKey {
        match self {
            Self::ClassNotFound { .. } => MessageKey::ApexClassNotFound,
            Self::InvalidExtensionPoint { .. } => MessageKey::InvalidExtensionPoint,
            Self::MissingName => MessageKey::UndefinedName,
            Self::RegistrationConflict { .. } => MessageKey::RegistrationRejected,
            Self::RegistrationWrite { .. } => MessageKey::RegistrationWriteFailed,
            Self::ProjectionMissing { .. } => MessageKey::ProjectionMissing,
            Self::Gateway { .. } => MessageKey::GatewayFailure,
        }
    }

    /// Returns the named values the catalog template may reference.
    #[must_use]
    pub fn message_context(&self) -> Map<String, Value> {
        let mut context = Map::new();
        context.insert(
            "stage".to_owned(),
            Value::String(self.stage().as_str().to_owned()),
        );
        match self {
            Self::ClassNotFound { class_name, reason } => {
                insert_text(&mut context, "class_name", class_name);
                insert_text(&mut context, "reason", reason);
            }
            Self::InvalidExtensionPoint { extension_point } => {
                insert_text(&mut context, "extension_point", extension_point.as_str());
            }
            Self::MissingName => {}
            Self::RegistrationConflict {
                developer_name,
                reason,
                ..
            } => {
                insert_text(&mut context, "developer_name", developer_name.as_str());
                insert_text(&mut context, "reason", reason);
            }
            Self::RegistrationWrite {
                developer_name,
                source,
            } => {
                insert_text(&mut context, "developer_name", developer_name.as_str());
                insert_text(&mut context, "reason", &source.to_string());
            }
            Self::ProjectionMissing { developer_name } => {
                insert_text(&mut context, "developer_name", developer_name.as_str());
            }
            Self::Gateway { source, .. } => {
                insert_text(&mut context, "reason", &source.to_string());
            }
        }
        context
    }
}

fn insert_text(context: &mut Map<String, Value>, key: &str, value: &str) {
    context.insert(key.to_owned(), Value::String(value.to_owned()));
}
