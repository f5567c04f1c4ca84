//! Apex class name to identifier resolution.

use super::RegistrationError;
use crate::extension::{
    domain::{APEX_CLASS_OBJECT, ActingIdentity, ApexClassRef, RecordId, SoqlQuery},
    ports::RemoteDataGateway,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApexClassRow {
    #[serde(default)]
    id: Option<String>,
}

/// Resolves an Apex class name to its record identifier.
#[derive(Clone)]
pub struct ApexClassResolver<G>
where
    G: RemoteDataGateway,
{
    gateway: Arc<G>,
}

impl<G> ApexClassResolver<G>
where
    G: RemoteDataGateway,
{
    /// Creates a resolver over the given gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Looks up exactly one class named `class_name` visible to `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::ClassNotFound`] when the query fails,
    /// matches nothing, or yields no usable identifier.
    pub async fn resolve(
        &self,
        class_name: &str,
        identity: &ActingIdentity,
    ) -> Result<ApexClassRef, RegistrationError> {
        let query = SoqlQuery::select(APEX_CLASS_OBJECT, ["Id"])
            .where_eq("Name", class_name)
            .limit(1);

        let result = self
            .gateway
            .query(&query, identity)
            .await
            .map_err(|err| class_not_found(class_name, err.to_string()))?;

        let raw_id = result
            .first_as::<ApexClassRow>()
            .map_err(|err| class_not_found(class_name, err.to_string()))?
            .and_then(|row| row.id)
            .ok_or_else(|| class_not_found(class_name, "no matching ApexClass record"))?;

        let id = RecordId::new(raw_id).map_err(|err| class_not_found(class_name, err.to_string()))?;
        Ok(ApexClassRef::new(id, class_name))
    }
}

fn class_not_found(class_name: &str, reason: impl Into<String>) -> RegistrationError {
    RegistrationError::ClassNotFound {
        class_name: class_name.to_owned(),
        reason: reason.into(),
    }
}
