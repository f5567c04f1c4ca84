//! Read-back projection of a created registration.

use super::{RegistrationError, RegistrationStage};
use crate::extension::{
    domain::{
        ActingIdentity, REGISTERED_EXTERNAL_SERVICE, RegisteredExtension, RegisteredName,
        RegistrationResult, SoqlQuery,
    },
    ports::RemoteDataGateway,
};
use std::sync::Arc;

/// Re-reads a registration by developer name and narrows it to a
/// [`RegistrationResult`].
#[derive(Clone)]
pub struct RegistrationProjector<G>
where
    G: RemoteDataGateway,
{
    gateway: Arc<G>,
}

impl<G> RegistrationProjector<G>
where
    G: RemoteDataGateway,
{
    /// Creates a projector over the given gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Reads the registration named `name` and projects the first row.
    ///
    /// Returns `Ok(None)` when no row matches. Additional rows are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Gateway`] when the query fails or the
    /// first row cannot be decoded.
    pub async fn project(
        &self,
        name: &RegisteredName,
        identity: &ActingIdentity,
    ) -> Result<Option<RegistrationResult>, RegistrationError> {
        let query = SoqlQuery::select(REGISTERED_EXTERNAL_SERVICE, RegisteredExtension::FIELDS)
            .where_eq("DeveloperName", name.as_str());

        let projection_failed = |source| RegistrationError::Gateway {
            stage: RegistrationStage::Projecting,
            source,
        };

        let record = self
            .gateway
            .query(&query, identity)
            .await
            .map_err(projection_failed)?
            .first_as::<RegisteredExtension>()
            .map_err(projection_failed)?;

        Ok(record.as_ref().map(RegistrationResult::from))
    }
}
