//! Configuration for the Datatype Registry module.

use figment::Figment;
use serde::Deserialize;
use thiserror::Error;

/// Name of the module's section under `modules.` in the configuration tree.
pub const MODULE_NAME: &str = "datatype_registry";

/// Configuration for the Datatype Registry module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DatatypeRegistryConfig {
    /// When comparing two typed literals, also ask the second literal's
    /// datatype whether it considers the first equal.
    /// Default: `true`
    pub bidirectional_equality: bool,

    /// Register the built-in `xsd:string` datatype when the module starts.
    /// Default: `false`
    pub preregister_builtin: bool,
}

impl Default for DatatypeRegistryConfig {
    fn default() -> Self {
        Self {
            bidirectional_equality: true,
            preregister_builtin: false,
        }
    }
}

/// Errors raised while loading module configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The module's config section exists but does not deserialize.
    #[error("invalid configuration for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: Box<figment::Error>,
    },
}

impl DatatypeRegistryConfig {
    /// Reads `modules.datatype_registry.config` from `figment`.
    ///
    /// A missing section yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the section is present but malformed.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let path = format!("modules.{MODULE_NAME}.config");
        if !figment.contains(&path) {
            return Ok(Self::default());
        }

        figment
            .extract_inner(&path)
            .map_err(|e| ConfigError::InvalidConfig {
                module: MODULE_NAME.to_owned(),
                source: Box::new(e),
            })
    }
}
