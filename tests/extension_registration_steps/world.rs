//! Shared world state for extension registration BDD scenarios.

use std::sync::Arc;

use commerce_extension::extension::{
    adapters::{TemplateMessageCatalog, memory::InMemoryOrg},
    domain::{RecordId, RegistrationResult},
    services::{ExtensionRegistrationService, RegisterExtensionRequest, RegistrationError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestRegistrationService =
    ExtensionRegistrationService<InMemoryOrg, TemplateMessageCatalog>;

/// Username every scenario acts as.
pub const USERNAME: &str = "admin@example.com";

/// Scenario world for extension registration behaviour tests.
pub struct ExtensionWorld {
    /// Org backing the service.
    pub org: InMemoryOrg,
    /// The registration service under test.
    pub service: TestRegistrationService,
    /// Identifier of the last seeded Apex class.
    pub class_id: Option<RecordId>,
    /// Result of the last registration attempt.
    pub last_result: Option<Result<RegistrationResult, RegistrationError>>,
}

impl ExtensionWorld {
    /// Creates a world over an empty org.
    #[must_use]
    pub fn new() -> Self {
        let org = InMemoryOrg::new();
        let service = ExtensionRegistrationService::new(
            Arc::new(org.clone()),
            Arc::new(TemplateMessageCatalog::new()),
        );
        Self {
            org,
            service,
            class_id: None,
            last_result: None,
        }
    }
}

impl Default for ExtensionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ExtensionWorld {
    ExtensionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a named [`RegisterExtensionRequest`] for the scenario user.
pub fn build_request(name: &str, extension_point: &str, class_name: &str) -> RegisterExtensionRequest {
    RegisterExtensionRequest::new(extension_point, class_name, USERNAME).with_registered_name(name)
}
