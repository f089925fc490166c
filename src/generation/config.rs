//! Generator configuration
//!
//! Loaded from a TOML file; every field has a default so an empty file (or no
//! file at all) reproduces the stock naming conventions.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::generation::{GenerationError, HttpMethod};

/// Which parameters a generated method carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterPolicy {
    /// Only `in: path` parameters
    #[default]
    PathOnly,
    /// Every parameter, in declaration order
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Prepended to the class name to form the interface name
    pub interface_prefix: String,
    /// Class name for paths made only of placeholders
    pub fallback_class_name: Option<String>,
    pub parameters: ParameterPolicy,
    /// Per-verb overrides, keyed by lowercase verb token
    pub method_names: HashMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interface_prefix: "I".to_string(),
            fallback_class_name: None,
            parameters: ParameterPolicy::default(),
            method_names: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, GenerationError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GenerationError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded generator config");
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), GenerationError> {
        // Keys are matched case-insensitively, so `post` and `POST` name one verb
        let mut seen = HashSet::new();
        for (verb, name) in &self.method_names {
            let method = verb.parse::<HttpMethod>().map_err(|_| {
                GenerationError::InvalidConfiguration(format!(
                    "method_names has an unsupported verb key '{verb}'"
                ))
            })?;
            if !seen.insert(method) {
                return Err(GenerationError::InvalidConfiguration(format!(
                    "method_names sets {method} more than once"
                )));
            }
            if name.trim().is_empty() {
                return Err(GenerationError::InvalidConfiguration(format!(
                    "method_names.{verb} cannot be empty"
                )));
            }
        }

        if let Some(fallback) = &self.fallback_class_name {
            if fallback.trim().is_empty() {
                return Err(GenerationError::InvalidConfiguration(
                    "fallback_class_name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Method name for a verb: the configured override, else the stock table.
    pub fn method_name(&self, method: HttpMethod) -> String {
        self.method_names
            .iter()
            .find(|(verb, _)| verb.parse::<HttpMethod>().ok() == Some(method))
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| default_method_name(method).to_string())
    }
}

/// Stock verb-to-method-name table.
///
/// PUT on these resources is an idempotent create-or-fetch, hence `GetOrCreate`.
pub fn default_method_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "Get",
        HttpMethod::Put => "GetOrCreate",
        HttpMethod::Delete => "Delete",
        HttpMethod::Post => "Create",
        HttpMethod::Patch => "Update",
    }
}
