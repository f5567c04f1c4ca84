//! Behaviour tests for extension point registration.

mod extension_registration_steps;

use extension_registration_steps::world::{ExtensionWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/extension_registration.feature",
    name = "Register an Apex class against an extension point"
)]
#[tokio::test(flavor = "multi_thread")]
async fn register_apex_class(world: ExtensionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/extension_registration.feature",
    name = "Reject a registered name that already exists"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_duplicate_name(world: ExtensionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/extension_registration.feature",
    name = "Reject an unknown extension point"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_unknown_extension_point(world: ExtensionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/extension_registration.feature",
    name = "Reject an unknown Apex class"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_unknown_class(world: ExtensionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/extension_registration.feature",
    name = "Require a registered name"
)]
#[tokio::test(flavor = "multi_thread")]
async fn require_registered_name(world: ExtensionWorld) {
    let _ = world;
}
