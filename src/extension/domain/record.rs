//! Registration record and Apex class reference.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Object type holding Apex classes.
pub const APEX_CLASS_OBJECT: &str = "ApexClass";

/// Object type exposing picklist values.
pub const PICKLIST_VALUE_OBJECT: &str = "PicklistValueInfo";

/// Durable id of the picklist field enumerating extension points.
pub const EXTENSION_POINT_FIELD: &str = "RegisteredExternalService.ExtensionPointName";

/// Object type holding extension registrations.
pub const REGISTERED_EXTERNAL_SERVICE: &str = "RegisteredExternalService";

/// Provider type written for every Apex-backed registration.
pub const EXTENSION_PROVIDER_TYPE: &str = "Extension";

/// Apex class resolved for the duration of one registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApexClassRef {
    id: RecordId,
    name: String,
}

impl ApexClassRef {
    /// Creates a reference from a resolved identifier and class name.
    #[must_use]
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the class identifier.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the class name used for the lookup.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `RegisteredExternalService` row as read back from the remote store.
///
/// Field names follow the remote API casing on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisteredExtension {
    id: RecordId,
    developer_name: String,
    #[serde(default)]
    master_label: Option<String>,
    extension_point_name: String,
    external_service_provider_id: RecordId,
    external_service_provider_type: String,
    #[serde(default)]
    config_url: Option<String>,
    #[serde(default)]
    documentation_url: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    namespace_prefix: Option<String>,
}

impl RegisteredExtension {
    /// Field list requested when reading a registration back.
    pub const FIELDS: [&'static str; 10] = [
        "Id",
        "ConfigUrl",
        "DeveloperName",
        "DocumentationUrl",
        "ExtensionPointName",
        "ExternalServiceProviderId",
        "ExternalServiceProviderType",
        "Language",
        "MasterLabel",
        "NamespacePrefix",
    ];

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the unique developer name.
    #[must_use]
    pub fn developer_name(&self) -> &str {
        &self.developer_name
    }

    /// Returns the master label.
    #[must_use]
    pub fn master_label(&self) -> Option<&str> {
        self.master_label.as_deref()
    }

    /// Returns the extension point the record is bound to.
    #[must_use]
    pub fn extension_point_name(&self) -> &str {
        &self.extension_point_name
    }

    /// Returns the Apex class identifier backing the extension.
    #[must_use]
    pub const fn external_service_provider_id(&self) -> &RecordId {
        &self.external_service_provider_id
    }

    /// Returns the provider type.
    #[must_use]
    pub fn external_service_provider_type(&self) -> &str {
        &self.external_service_provider_type
    }

    /// Returns the configuration URL.
    #[must_use]
    pub fn config_url(&self) -> Option<&str> {
        self.config_url.as_deref()
    }

    /// Returns the documentation URL.
    #[must_use]
    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    /// Returns the record language.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the owning namespace prefix.
    #[must_use]
    pub fn namespace_prefix(&self) -> Option<&str> {
        self.namespace_prefix.as_deref()
    }
}
