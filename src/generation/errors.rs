//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while processing a path entry or building a resource
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Unsupported verb '{verb}' on path {path}")]
    UnsupportedVerb { path: String, verb: String },

    #[error("Unknown parameter location '{location}' for parameter '{name}' on {path}")]
    UnknownParameterLocation {
        path: String,
        name: String,
        location: String,
    },

    #[error("Malformed operation on {path}: {detail}")]
    MalformedOperation { path: String, detail: String },

    #[error("Malformed parameter on {path}: {detail}")]
    MalformedParameter { path: String, detail: String },

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unable to resolve reference: {0}")]
    UnresolvedReference(String),

    #[error("Path {0} has no literal segments to derive a name from")]
    UnnameablePath(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GenerationError {
    pub fn malformed_operation(path: &str, detail: impl Into<String>) -> Self {
        Self::MalformedOperation {
            path: path.to_string(),
            detail: detail.into(),
        }
    }

    pub fn malformed_parameter(path: &str, detail: impl Into<String>) -> Self {
        Self::MalformedParameter {
            path: path.to_string(),
            detail: detail.into(),
        }
    }
}
