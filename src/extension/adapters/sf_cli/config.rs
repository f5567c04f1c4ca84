//! Configuration for the `sf` CLI gateway.

use serde::Deserialize;
use std::env;

/// Environment variable overriding the CLI program.
pub const PROGRAM_ENV: &str = "SF_CLI_PROGRAM";

/// Environment variable pinning the API version.
pub const API_VERSION_ENV: &str = "SF_API_VERSION";

const DEFAULT_PROGRAM: &str = "sf";

/// Settings for [`super::SfCliGateway`].
///
/// A representative JSON form is:
///
/// ```json
/// { "program": "/usr/local/bin/sf", "api_version": "60.0" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SfCliConfig {
    /// CLI executable name or path.
    pub program: String,
    /// API version passed with `--api-version`, when set.
    pub api_version: Option<String>,
}

impl SfCliConfig {
    /// Builds a configuration from defaults and environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();
        if let Some(program) = non_blank(PROGRAM_ENV) {
            config.program = program;
        }
        config.api_version = non_blank(API_VERSION_ENV);
        config
    }

    /// Sets the CLI executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Pins the API version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }
}

impl Default for SfCliConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_owned(),
            api_version: None,
        }
    }
}
