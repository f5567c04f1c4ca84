//! `minijinja`-backed message catalog.

use crate::extension::ports::{MessageError, MessageKey, MessageResolver};
use minijinja::Environment;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const DEFAULT_TEMPLATES: [(MessageKey, &str); 9] = [
    (
        MessageKey::RetrievingApexClass,
        "Retrieving Apex Class '{{ class_name }}' using username: {{ username }}",
    ),
    (
        MessageKey::ApexClassNotFound,
        "Apex class '{{ class_name }}' could not be found in the org.\n{{ reason }}",
    ),
    (
        MessageKey::InvalidExtensionPoint,
        "'{{ extension_point }}' is not a valid extension point name. Check the ExtensionPointName picklist for supported values.",
    ),
    (
        MessageKey::UndefinedName,
        "A registered extension name is required. Supply one with --registered-extension-name.",
    ),
    (
        MessageKey::RegistrationRejected,
        "Could not register extension '{{ developer_name }}'. The name may already be in use.\n{{ reason }}",
    ),
    (
        MessageKey::RegistrationWriteFailed,
        "Could not write registration '{{ developer_name }}'.\n{{ reason }}",
    ),
    (
        MessageKey::ProjectionMissing,
        "Registration '{{ developer_name }}' was created but could not be read back. It may still exist in the org.",
    ),
    (
        MessageKey::GatewayFailure,
        "Remote call failed while {{ stage | replace('_', ' ') }}.\n{{ reason }}",
    ),
    (
        MessageKey::RegistrationSaved,
        "Registered '{{ developer_name }}' for extension point {{ extension_point }}.",
    ),
];

/// Message catalog rendering `minijinja` templates.
///
/// Starts with English defaults for every [`MessageKey`]; individual
/// templates can be replaced for localisation.
#[derive(Debug, Clone)]
pub struct TemplateMessageCatalog {
    templates: BTreeMap<MessageKey, String>,
}

impl TemplateMessageCatalog {
    /// Creates a catalog with the default English templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(key, template)| (*key, (*template).to_owned()))
                .collect(),
        }
    }

    /// Creates a catalog with no templates.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Replaces the template for `key`.
    #[must_use]
    pub fn with_template(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.templates.insert(key, template.into());
        self
    }
}

impl Default for TemplateMessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageResolver for TemplateMessageCatalog {
    fn resolve(&self, key: MessageKey, context: &Map<String, Value>) -> Result<String, MessageError> {
        let template = self
            .templates
            .get(&key)
            .ok_or(MessageError::UnknownKey(key))?;
        let environment = Environment::new();
        environment
            .render_str(template, context)
            .map_err(|error| MessageError::Render {
                key,
                reason: error.to_string(),
            })
    }
}
