//! Given steps for extension registration BDD scenarios.

use super::world::{ExtensionWorld, build_request, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an Apex class named "{class_name}""#)]
fn an_apex_class_named(world: &mut ExtensionWorld, class_name: String) -> Result<(), eyre::Report> {
    let id = world
        .org
        .insert_apex_class(class_name)
        .wrap_err("seed Apex class")?;
    world.class_id = Some(id);
    Ok(())
}

#[given(r#"a valid extension point "{extension_point}""#)]
fn a_valid_extension_point(
    world: &mut ExtensionWorld,
    extension_point: String,
) -> Result<(), eyre::Report> {
    world
        .org
        .insert_extension_point(extension_point)
        .wrap_err("seed extension point")
}

#[given(
    r#"the extension "{name}" has already been registered for "{extension_point}" with class "{class_name}""#
)]
fn extension_already_registered(
    world: &mut ExtensionWorld,
    name: String,
    extension_point: String,
    class_name: String,
) -> Result<(), eyre::Report> {
    let request = build_request(&name, &extension_point, &class_name);
    run_async(world.service.register(request)).wrap_err("register existing extension")?;
    Ok(())
}
