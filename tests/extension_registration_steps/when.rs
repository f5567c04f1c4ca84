//! When steps for extension registration BDD scenarios.

use super::world::{ExtensionWorld, USERNAME, build_request, run_async};
use commerce_extension::extension::services::RegisterExtensionRequest;
use rstest_bdd_macros::when;

#[when(r#"the extension "{name}" is registered for "{extension_point}" with class "{class_name}""#)]
fn register_extension(
    world: &mut ExtensionWorld,
    name: String,
    extension_point: String,
    class_name: String,
) {
    let request = build_request(&name, &extension_point, &class_name);
    world.last_result = Some(run_async(world.service.register(request)));
}

#[when(r#"an unnamed extension is registered for "{extension_point}" with class "{class_name}""#)]
fn register_unnamed_extension(
    world: &mut ExtensionWorld,
    extension_point: String,
    class_name: String,
) {
    let request = RegisterExtensionRequest::new(extension_point, class_name, USERNAME);
    world.last_result = Some(run_async(world.service.register(request)));
}
