//! Public projection of a created registration.

use super::{RecordId, RegisteredExtension};
use serde::{Deserialize, Serialize};

/// Minimal, stable view of a registration returned to callers.
///
/// Serializes as
/// `{"UniqueExtensionId", "ApexClassId", "RegisteredExtensionName",
/// "ExtensionPointName", "ExternalServiceProviderType"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistrationResult {
    unique_extension_id: RecordId,
    apex_class_id: RecordId,
    registered_extension_name: String,
    extension_point_name: String,
    external_service_provider_type: String,
}

impl RegistrationResult {
    /// Returns the registration record identifier.
    #[must_use]
    pub const fn unique_extension_id(&self) -> &RecordId {
        &self.unique_extension_id
    }

    /// Returns the backing Apex class identifier.
    #[must_use]
    pub const fn apex_class_id(&self) -> &RecordId {
        &self.apex_class_id
    }

    /// Returns the registered developer name.
    #[must_use]
    pub fn registered_extension_name(&self) -> &str {
        &self.registered_extension_name
    }

    /// Returns the extension point name.
    #[must_use]
    pub fn extension_point_name(&self) -> &str {
        &self.extension_point_name
    }

    /// Returns the provider type.
    #[must_use]
    pub fn external_service_provider_type(&self) -> &str {
        &self.external_service_provider_type
    }

    /// Renders the projection as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if rendering fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&RegisteredExtension> for RegistrationResult {
    fn from(record: &RegisteredExtension) -> Self {
        Self {
            unique_extension_id: record.id().clone(),
            apex_class_id: record.external_service_provider_id().clone(),
            registered_extension_name: record.developer_name().to_owned(),
            extension_point_name: record.extension_point_name().to_owned(),
            external_service_provider_type: record.external_service_provider_type().to_owned(),
        }
    }
}
