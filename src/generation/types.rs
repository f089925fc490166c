//! Core types for the generation domain
//!
//! `PathMetadata` is the parsed, read-only input every stage sees;
//! `ApiBuilderResult` is the model the stages fill in for the emitter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs a client resource method can be derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Get all supported HTTP methods
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ]
    }

    /// Lowercase token as it appears as a key in a spec path item
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    /// Exact match on the lowercase path-item key; `GET` is not a verb key
    pub fn from_token(token: &str) -> Option<HttpMethod> {
        Self::all()
            .iter()
            .copied()
            .find(|method| method.as_str() == token)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Patch => write!(f, "PATCH"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "patch" => Ok(HttpMethod::Patch),
            "delete" => Ok(HttpMethod::Delete),
            _ => Err(format!("Unsupported HTTP method: {s}")),
        }
    }
}

/// Where a parameter is carried in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Body,
}

impl FromStr for ParameterLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(ParameterLocation::Path),
            "query" => Ok(ParameterLocation::Query),
            "header" => Ok(ParameterLocation::Header),
            "cookie" => Ok(ParameterLocation::Cookie),
            "body" => Ok(ParameterLocation::Body),
            other => Err(format!("Unknown parameter location: {other}")),
        }
    }
}

/// Semantic type tag of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Object => "object",
            ParameterType::Array => "array",
        }
    }

    /// Classify a JSON-schema `type` keyword. `integer` folds into `number`.
    pub fn from_schema_type(schema_type: &str) -> Option<Self> {
        match schema_type {
            "string" => Some(ParameterType::String),
            "number" | "integer" => Some(ParameterType::Number),
            "boolean" => Some(ParameterType::Boolean),
            "object" => Some(ParameterType::Object),
            "array" => Some(ParameterType::Array),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared parameter of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        location: ParameterLocation,
        required: bool,
        param_type: ParameterType,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            required,
            param_type,
        }
    }

    /// Shorthand for a required path parameter
    pub fn path(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self::new(name, ParameterLocation::Path, true, param_type)
    }
}

/// One verb declared on a path, with its parameters in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbDefinition {
    pub method: HttpMethod,
    pub parameters: Vec<Parameter>,
}

/// Parsed representation of one spec path entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMetadata {
    /// The path exactly as written in the spec, placeholders included
    pub path: String,
    pub verbs: Vec<VerbDefinition>,
}

impl PathMetadata {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            verbs: Vec::new(),
        }
    }

    pub fn with_verb(mut self, method: HttpMethod, parameters: Vec<Parameter>) -> Self {
        self.verbs.push(VerbDefinition { method, parameters });
        self
    }
}

/// A method on the generated client resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodResult {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

/// The model handed to the emitter: one client resource for one path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBuilderResult {
    pub class_name: String,
    pub interface_name: String,
    pub methods: Vec<MethodResult>,
}
