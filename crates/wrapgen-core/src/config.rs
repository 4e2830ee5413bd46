//! Generator configuration

use crate::imports::{DEFAULT_IMPLICIT_NAMESPACES, ImportPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option name overriding where resources are read from
pub const OPTION_RESOURCE_PATH: &str = "resourcePath";

/// Option name enabling debug notes
pub const OPTION_DEBUG: &str = "debug";

/// Configuration consumed at start-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Resource path override
    ///
    /// Recorded for the concrete generator; the built-in wrapper generator
    /// reads no resources and ignores it.
    #[serde(default)]
    pub resource_path: Option<String>,

    /// Emit debug notes while processing
    #[serde(default)]
    pub debug: bool,

    /// Options not recognized here, passed through to the concrete generator
    #[serde(default)]
    pub options: BTreeMap<String, String>,

    /// Namespaces whose members never need an import
    #[serde(default = "default_implicit_namespaces")]
    pub implicit_namespaces: Vec<String>,
}

fn default_implicit_namespaces() -> Vec<String> {
    DEFAULT_IMPLICIT_NAMESPACES
        .iter()
        .map(|ns| ns.to_string())
        .collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            resource_path: None,
            debug: false,
            options: BTreeMap::new(),
            implicit_namespaces: default_implicit_namespaces(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build configuration from an option map
    ///
    /// `resourcePath` and `debug` are recognized; everything else lands in
    /// [`GeneratorConfig::options`].
    pub fn from_options<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (name, value) in options {
            config.apply_option(name.into(), value.into());
        }
        config
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Apply a single option
    pub fn apply_option(&mut self, name: String, value: String) {
        tracing::debug!(option = name.as_str(), value = value.as_str(), "option");

        match name.as_str() {
            OPTION_RESOURCE_PATH => self.resource_path = Some(value),
            OPTION_DEBUG => self.debug = value == "true",
            _ => {
                self.options.insert(name, value);
            }
        }
    }

    /// Get a passthrough option
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Import policy derived from the configured implicit namespaces
    pub fn import_policy(&self) -> ImportPolicy {
        ImportPolicy::new(self.implicit_namespaces.iter().cloned())
    }
}
