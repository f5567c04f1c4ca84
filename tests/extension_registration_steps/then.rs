//! Then steps for extension registration BDD scenarios.

use super::world::ExtensionWorld;
use commerce_extension::extension::{
    domain::RegistrationResult,
    services::RegistrationError,
};
use rstest_bdd_macros::then;

fn last_result(
    world: &ExtensionWorld,
) -> Result<&Result<RegistrationResult, RegistrationError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))
}

fn last_error(world: &ExtensionWorld) -> Result<&RegistrationError, eyre::Report> {
    match last_result(world)? {
        Ok(result) => Err(eyre::eyre!("expected failure, got {result:?}")),
        Err(err) => Ok(err),
    }
}

#[then(r#"the registration succeeds with name "{name}""#)]
fn registration_succeeds(world: &ExtensionWorld, name: String) -> Result<(), eyre::Report> {
    let result = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("registration failed: {err}"))?;
    if result.registered_extension_name() != name {
        return Err(eyre::eyre!(
            "expected name '{name}', found '{}'",
            result.registered_extension_name()
        ));
    }
    if result.external_service_provider_type() != "Extension" {
        return Err(eyre::eyre!(
            "unexpected provider type '{}'",
            result.external_service_provider_type()
        ));
    }
    Ok(())
}

#[then("the result references the resolved Apex class")]
fn result_references_class(world: &ExtensionWorld) -> Result<(), eyre::Report> {
    let expected = world
        .class_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no Apex class seeded in scenario world"))?;
    let result = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("registration failed: {err}"))?;
    if result.apex_class_id() != expected {
        return Err(eyre::eyre!(
            "expected Apex class {expected}, found {}",
            result.apex_class_id()
        ));
    }
    Ok(())
}

#[then(r#"registration fails with a conflict naming "{name}""#)]
fn registration_conflicts(world: &ExtensionWorld, name: String) -> Result<(), eyre::Report> {
    match last_error(world)? {
        RegistrationError::RegistrationConflict { developer_name, .. }
            if developer_name.as_str() == name =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected conflict for '{name}', got {other:?}")),
    }
}

#[then("registration fails with an invalid extension point error")]
fn registration_invalid_extension_point(world: &ExtensionWorld) -> Result<(), eyre::Report> {
    match last_error(world)? {
        RegistrationError::InvalidExtensionPoint { .. } => Ok(()),
        other => Err(eyre::eyre!("expected invalid extension point, got {other:?}")),
    }
}

#[then("registration fails with a class not found error")]
fn registration_class_not_found(world: &ExtensionWorld) -> Result<(), eyre::Report> {
    match last_error(world)? {
        RegistrationError::ClassNotFound { .. } => Ok(()),
        other => Err(eyre::eyre!("expected class not found, got {other:?}")),
    }
}

#[then("registration fails with a missing name error")]
fn registration_missing_name(world: &ExtensionWorld) -> Result<(), eyre::Report> {
    match last_error(world)? {
        RegistrationError::MissingName => Ok(()),
        other => Err(eyre::eyre!("expected missing name, got {other:?}")),
    }
}

#[then("no registration record was created")]
fn no_record_created(world: &ExtensionWorld) -> Result<(), eyre::Report> {
    let records = world
        .org
        .records("RegisteredExternalService")
        .map_err(|err| eyre::eyre!("reading records failed: {err}"))?;
    if !records.is_empty() {
        return Err(eyre::eyre!("expected no records, found {}", records.len()));
    }
    Ok(())
}
