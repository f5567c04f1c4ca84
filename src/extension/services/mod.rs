//! Application services for extension point registration.

mod error;
mod projector;
mod registration;
mod resolver;
mod validator;
mod writer;

pub use error::{RegistrationError, RegistrationStage};
pub use projector::RegistrationProjector;
pub use registration::{ExtensionRegistrationService, RegisterExtensionRequest};
pub use resolver::ApexClassResolver;
pub use validator::ExtensionPointValidator;
pub use writer::RegistrationWriter;
