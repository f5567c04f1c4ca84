//! Registration record creation.

use super::RegistrationError;
use crate::extension::{
    domain::{
        ActingIdentity, ApexClassRef, EXTENSION_PROVIDER_TYPE, ExtensionPointName, RecordFields,
        RecordId, REGISTERED_EXTERNAL_SERVICE, RegisteredName,
    },
    ports::{GatewayError, RemoteDataGateway},
};
use std::sync::Arc;

/// Creates `RegisteredExternalService` records.
///
/// Name uniqueness is not checked locally; the remote store's rejection is
/// authoritative and surfaces as [`RegistrationError::RegistrationConflict`].
#[derive(Clone)]
pub struct RegistrationWriter<G>
where
    G: RemoteDataGateway,
{
    gateway: Arc<G>,
}

impl<G> RegistrationWriter<G>
where
    G: RemoteDataGateway,
{
    /// Creates a writer over the given gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Builds the create payload for a registration.
    #[must_use]
    pub fn fields(
        name: &RegisteredName,
        extension_point: &ExtensionPointName,
        apex_class: &ApexClassRef,
    ) -> RecordFields {
        RecordFields::new()
            .with("DeveloperName", name.as_str())
            .with("MasterLabel", name.as_str())
            .with("ExtensionPointName", extension_point.as_str())
            .with("ExternalServiceProviderId", apex_class.id().as_str())
            .with("ExternalServiceProviderType", EXTENSION_PROVIDER_TYPE)
    }

    /// Creates the registration record and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::RegistrationConflict`] when the remote
    /// store rejects the record, or [`RegistrationError::RegistrationWrite`]
    /// for any other gateway failure.
    pub async fn write(
        &self,
        name: &RegisteredName,
        extension_point: &ExtensionPointName,
        apex_class: &ApexClassRef,
        identity: &ActingIdentity,
    ) -> Result<RecordId, RegistrationError> {
        let fields = Self::fields(name, extension_point, apex_class);
        self.gateway
            .create(REGISTERED_EXTERNAL_SERVICE, &fields, identity)
            .await
            .map_err(|err| match err {
                GatewayError::Rejected {
                    error_code,
                    message,
                } => RegistrationError::RegistrationConflict {
                    developer_name: name.clone(),
                    error_code,
                    reason: message,
                },
                source => RegistrationError::RegistrationWrite {
                    developer_name: name.clone(),
                    source,
                },
            })
    }
}
