//! Extension point name validation against the remote picklist.

use super::{RegistrationError, RegistrationStage};
use crate::extension::{
    domain::{
        ActingIdentity, EXTENSION_POINT_FIELD, ExtensionPointName, PICKLIST_VALUE_OBJECT,
        SoqlQuery,
    },
    ports::RemoteDataGateway,
};
use std::sync::Arc;

/// Confirms an extension point name is a current picklist value.
///
/// The enumeration is queried on every call and never cached.
#[derive(Clone)]
pub struct ExtensionPointValidator<G>
where
    G: RemoteDataGateway,
{
    gateway: Arc<G>,
}

impl<G> ExtensionPointValidator<G>
where
    G: RemoteDataGateway,
{
    /// Creates a validator over the given gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Checks that `extension_point` is enumerated by the remote store.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidExtensionPoint`] when no picklist
    /// row matches, or [`RegistrationError::Gateway`] when the query fails.
    pub async fn validate(
        &self,
        extension_point: &ExtensionPointName,
        identity: &ActingIdentity,
    ) -> Result<(), RegistrationError> {
        let query = SoqlQuery::select(PICKLIST_VALUE_OBJECT, ["Value"])
            .where_eq("Value", extension_point.as_str())
            .where_eq("EntityParticle.DurableId", EXTENSION_POINT_FIELD)
            .limit(1);

        let result = self
            .gateway
            .query(&query, identity)
            .await
            .map_err(|source| RegistrationError::Gateway {
                stage: RegistrationStage::ValidatingExtensionPoint,
                source,
            })?;

        if result.is_empty() {
            return Err(RegistrationError::InvalidExtensionPoint {
                extension_point: extension_point.clone(),
            });
        }
        Ok(())
    }
}
