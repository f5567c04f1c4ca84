//! Domain model for extension point registration.
//!
//! The extension domain models the values exchanged with the remote org:
//! record identifiers, extension point and registration names, the
//! registration record itself, and the projection returned to callers.
//! Transport concerns stay behind the gateway port.

mod error;
mod fields;
mod ids;
mod name;
mod record;
mod result;
mod soql;

pub use error::ExtensionDomainError;
pub use fields::RecordFields;
pub use ids::RecordId;
pub use name::{ActingIdentity, ExtensionPointName, RegisteredName};
pub use record::{
    APEX_CLASS_OBJECT, ApexClassRef, EXTENSION_POINT_FIELD, EXTENSION_PROVIDER_TYPE,
    PICKLIST_VALUE_OBJECT, REGISTERED_EXTERNAL_SERVICE, RegisteredExtension,
};
pub use result::RegistrationResult;
pub use soql::{FieldFilter, SoqlQuery, quote_literal};
