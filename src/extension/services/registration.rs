//! Service layer for extension point registration.
//!
//! Provides [`ExtensionRegistrationService`], which runs the registration
//! flow: resolve the Apex class, validate the extension point, check the
//! registered name, create the record, and read it back.

use super::{
    ApexClassResolver, ExtensionPointValidator, RegistrationError, RegistrationProjector,
    RegistrationStage, RegistrationWriter,
};
use crate::extension::{
    domain::{ActingIdentity, ExtensionPointName, RegisteredName, RegistrationResult},
    ports::{MessageKey, MessageResolver, RemoteDataGateway},
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Request payload for registering an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterExtensionRequest {
    registered_name: Option<String>,
    extension_point_name: String,
    apex_class_name: String,
    apex_namespace: Option<String>,
    acting_identity: ActingIdentity,
}

impl RegisterExtensionRequest {
    /// Creates a request with the fields every registration needs.
    ///
    /// The registered name is optional at construction; its absence is
    /// reported by [`ExtensionRegistrationService::register`].
    #[must_use]
    pub fn new(
        extension_point_name: impl Into<String>,
        apex_class_name: impl Into<String>,
        acting_identity: impl Into<String>,
    ) -> Self {
        Self {
            registered_name: None,
            extension_point_name: extension_point_name.into(),
            apex_class_name: apex_class_name.into(),
            apex_namespace: None,
            acting_identity: ActingIdentity::new(acting_identity),
        }
    }

    /// Sets the developer name of the registration.
    #[must_use]
    pub fn with_registered_name(mut self, name: impl Into<String>) -> Self {
        self.registered_name = Some(name.into());
        self
    }

    /// Sets the Apex namespace.
    ///
    /// The namespace is accepted for parity with the command surface but is
    /// not part of the lookup or the write payload.
    #[must_use]
    pub fn with_apex_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.apex_namespace = Some(namespace.into());
        self
    }

    /// Returns the registered name, if supplied.
    #[must_use]
    pub fn registered_name(&self) -> Option<&str> {
        self.registered_name.as_deref()
    }

    /// Returns the extension point name.
    #[must_use]
    pub fn extension_point_name(&self) -> &str {
        &self.extension_point_name
    }

    /// Returns the Apex class name.
    #[must_use]
    pub fn apex_class_name(&self) -> &str {
        &self.apex_class_name
    }

    /// Returns the Apex namespace, if supplied.
    #[must_use]
    pub fn apex_namespace(&self) -> Option<&str> {
        self.apex_namespace.as_deref()
    }

    /// Returns the identity remote calls run as.
    #[must_use]
    pub const fn acting_identity(&self) -> &ActingIdentity {
        &self.acting_identity
    }
}

/// Extension registration orchestration service.
///
/// Steps run strictly in sequence and the first failure ends the call. A
/// record created by the write step stays in place when the read-back step
/// fails; nothing is rolled back or retried.
#[derive(Clone)]
pub struct ExtensionRegistrationService<G, M>
where
    G: RemoteDataGateway,
    M: MessageResolver,
{
    resolver: ApexClassResolver<G>,
    validator: ExtensionPointValidator<G>,
    writer: RegistrationWriter<G>,
    projector: RegistrationProjector<G>,
    messages: Arc<M>,
}

impl<G, M> ExtensionRegistrationService<G, M>
where
    G: RemoteDataGateway,
    M: MessageResolver,
{
    /// Creates a registration service sharing one gateway across all steps.
    #[must_use]
    pub fn new(gateway: Arc<G>, messages: Arc<M>) -> Self {
        Self {
            resolver: ApexClassResolver::new(Arc::clone(&gateway)),
            validator: ExtensionPointValidator::new(Arc::clone(&gateway)),
            writer: RegistrationWriter::new(Arc::clone(&gateway)),
            projector: RegistrationProjector::new(gateway),
            messages,
        }
    }

    /// Registers an Apex class against an extension point.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistrationError`] raised by class resolution,
    /// extension point validation, the name check, the write, or the
    /// read-back, in that order.
    pub async fn register(
        &self,
        request: RegisterExtensionRequest,
    ) -> Result<RegistrationResult, RegistrationError> {
        let outcome = self.run(request).await;
        if let Err(err) = &outcome {
            warn!(stage = %err.stage(), "{}", self.describe(err));
        }
        outcome
    }

    /// Renders a user-facing description of a registration failure.
    ///
    /// Falls back to the error's own display text when the catalog cannot
    /// render the message.
    #[must_use]
    pub fn describe(&self, error: &RegistrationError) -> String {
        self.messages
            .resolve(error.message_key(), &error.message_context())
            .unwrap_or_else(|_| error.to_string())
    }

    async fn run(
        &self,
        request: RegisterExtensionRequest,
    ) -> Result<RegistrationResult, RegistrationError> {
        let RegisterExtensionRequest {
            registered_name,
            extension_point_name,
            apex_class_name,
            apex_namespace,
            acting_identity,
        } = request;

        self.log_retrieving(&apex_class_name, &acting_identity);
        if let Some(namespace) = apex_namespace.as_deref() {
            debug!(namespace, "apex namespace supplied; not applied to lookup or payload");
        }

        debug!(stage = %RegistrationStage::ResolvingClass, class_name = %apex_class_name);
        let apex_class = self
            .resolver
            .resolve(&apex_class_name, &acting_identity)
            .await?;

        let extension_point = ExtensionPointName::new(extension_point_name);
        debug!(stage = %RegistrationStage::ValidatingExtensionPoint, %extension_point);
        self.validator
            .validate(&extension_point, &acting_identity)
            .await?;

        debug!(stage = %RegistrationStage::CheckingName);
        let developer_name = registered_name
            .and_then(|name| RegisteredName::new(name).ok())
            .ok_or(RegistrationError::MissingName)?;

        debug!(stage = %RegistrationStage::Writing, %developer_name, apex_class_id = %apex_class.id());
        let record_id = self
            .writer
            .write(
                &developer_name,
                &extension_point,
                &apex_class,
                &acting_identity,
            )
            .await?;

        debug!(stage = %RegistrationStage::Projecting, %developer_name, %record_id);
        let result = self
            .projector
            .project(&developer_name, &acting_identity)
            .await?
            .ok_or_else(|| RegistrationError::ProjectionMissing {
                developer_name: developer_name.clone(),
            })?;

        self.log_saved(&result);
        Ok(result)
    }

    fn log_retrieving(&self, class_name: &str, identity: &ActingIdentity) {
        let mut context = Map::new();
        context.insert(
            "class_name".to_owned(),
            Value::String(class_name.to_owned()),
        );
        context.insert(
            "username".to_owned(),
            Value::String(identity.as_str().to_owned()),
        );
        match self
            .messages
            .resolve(MessageKey::RetrievingApexClass, &context)
        {
            Ok(line) => info!(class_name, username = %identity, "{line}"),
            Err(err) => debug!(error = %err, "progress message unavailable"),
        }
    }

    fn log_saved(&self, result: &RegistrationResult) {
        match result.to_pretty_json() {
            Ok(json) => info!("{json}"),
            Err(err) => warn!(error = %err, "failed to render registration result"),
        }

        let mut context = Map::new();
        context.insert(
            "developer_name".to_owned(),
            Value::String(result.registered_extension_name().to_owned()),
        );
        context.insert(
            "extension_point".to_owned(),
            Value::String(result.extension_point_name().to_owned()),
        );
        if let Ok(line) = self.messages.resolve(MessageKey::RegistrationSaved, &context) {
            info!(
                developer_name = result.registered_extension_name(),
                unique_extension_id = %result.unique_extension_id(),
                "{line}"
            );
        }
    }
}
