//! Path processor
//!
//! Turns one spec path entry (the path string and its object of verb
//! definitions) into [`PathMetadata`]. It handles:
//! - Verb tokens, in document order, mapped to [`HttpMethod`]
//! - Path-level parameters shared by every verb
//! - Parameter `$ref`s, through an injected [`ParameterResolver`]
//! - Type classification from the parameter schema (OpenAPI 3) or the
//!   parameter itself (Swagger 2)
//!
//! Anything it cannot make sense of is a parse error for that path; it never
//! returns partial metadata.

use serde_json::Value as JsonValue;

use crate::generation::{
    GenerationError, HttpMethod, Parameter, ParameterLocation, ParameterResolver, ParameterType,
    PathMetadata, VerbDefinition,
};

/// Guards against reference cycles in the resolved table
const MAX_REF_DEPTH: usize = 16;

/// Path item keys that sit beside the operations
fn is_path_item_field(key: &str) -> bool {
    matches!(
        key,
        "parameters" | "summary" | "description" | "servers" | "$ref"
    ) || key.starts_with("x-")
}

pub struct PathProcessor<'a> {
    resolver: &'a dyn ParameterResolver,
}

impl<'a> PathProcessor<'a> {
    pub fn new(resolver: &'a dyn ParameterResolver) -> Self {
        Self { resolver }
    }

    /// Process a single path entry.
    ///
    /// The path string is copied verbatim; verbs keep the order of `item`.
    /// A path item that is itself a `$ref` is resolved before its verbs are read.
    pub fn process(&self, path: &str, item: &JsonValue) -> Result<PathMetadata, GenerationError> {
        let item = self.resolve(item)?;
        let item = item.as_object().ok_or_else(|| {
            GenerationError::malformed_operation(path, "path item is not an object")
        })?;

        let shared = match item.get("parameters") {
            Some(parameters) => self.parse_parameters(path, parameters)?,
            None => Vec::new(),
        };

        let mut verbs = Vec::new();
        for (key, operation) in item {
            if is_path_item_field(key) {
                continue;
            }

            let method =
                HttpMethod::from_token(key).ok_or_else(|| GenerationError::UnsupportedVerb {
                    path: path.to_string(),
                    verb: key.clone(),
                })?;

            verbs.push(self.build_verb(path, method, operation, &shared)?);
        }

        tracing::debug!(path = %path, verbs = verbs.len(), "Processed path entry");

        Ok(PathMetadata {
            path: path.to_string(),
            verbs,
        })
    }

    /// Process every entry of a document's `paths` object, in document order
    pub fn process_document(
        &self,
        document: &JsonValue,
    ) -> Result<Vec<PathMetadata>, GenerationError> {
        let paths = document
            .get("paths")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| {
                GenerationError::MalformedDocument("missing 'paths' object".to_string())
            })?;

        paths
            .iter()
            .map(|(path, item)| self.process(path, item))
            .collect()
    }

    fn build_verb(
        &self,
        path: &str,
        method: HttpMethod,
        operation: &JsonValue,
        shared: &[Parameter],
    ) -> Result<VerbDefinition, GenerationError> {
        let operation = operation.as_object().ok_or_else(|| {
            let detail = format!("{method} operation is not an object");
            GenerationError::malformed_operation(path, detail)
        })?;

        let own = match operation.get("parameters") {
            Some(parameters) => self.parse_parameters(path, parameters)?,
            None => Vec::new(),
        };
        let parameters = merge_parameters(shared, own);

        tracing::debug!(
            path = %path,
            verb = %method,
            parameters = parameters.len(),
            "Parsed verb"
        );

        Ok(VerbDefinition { method, parameters })
    }

    fn parse_parameters(
        &self,
        path: &str,
        parameters: &JsonValue,
    ) -> Result<Vec<Parameter>, GenerationError> {
        let parameters = parameters.as_array().ok_or_else(|| {
            GenerationError::malformed_operation(path, "'parameters' is not an array")
        })?;

        parameters
            .iter()
            .map(|param| {
                let param = self.resolve(param)?;
                parse_parameter(path, &param, |schema| self.resolve(schema))
            })
            .collect()
    }

    /// Follow `$ref` links until a concrete value is reached
    fn resolve(&self, value: &JsonValue) -> Result<JsonValue, GenerationError> {
        let mut current = value.clone();

        // One lookup per link, plus the check of the value the last link lands on
        for _ in 0..=MAX_REF_DEPTH {
            let reference = current
                .get("$ref")
                .and_then(JsonValue::as_str)
                .map(str::to_string);

            match reference {
                Some(reference) => {
                    current = self
                        .resolver
                        .resolve(&reference)
                        .ok_or(GenerationError::UnresolvedReference(reference))?;
                }
                None => return Ok(current),
            }
        }

        Err(GenerationError::UnresolvedReference(format!(
            "reference chain deeper than {MAX_REF_DEPTH} starting at {}",
            value.get("$ref").and_then(JsonValue::as_str).unwrap_or_default()
        )))
    }
}

/// Operation parameters override path-level ones with the same name and
/// location, in place; new ones are appended.
fn merge_parameters(shared: &[Parameter], own: Vec<Parameter>) -> Vec<Parameter> {
    let mut merged = shared.to_vec();
    for parameter in own {
        match merged
            .iter_mut()
            .find(|p| p.name == parameter.name && p.location == parameter.location)
        {
            Some(existing) => *existing = parameter,
            None => merged.push(parameter),
        }
    }
    merged
}

fn parse_parameter<F>(
    path: &str,
    param: &JsonValue,
    resolve_schema: F,
) -> Result<Parameter, GenerationError>
where
    F: Fn(&JsonValue) -> Result<JsonValue, GenerationError>,
{
    let param = param
        .as_object()
        .ok_or_else(|| GenerationError::malformed_parameter(path, "parameter is not an object"))?;

    let name = param
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| GenerationError::malformed_parameter(path, "parameter missing name"))?
        .to_string();

    let location_token = param.get("in").and_then(JsonValue::as_str).ok_or_else(|| {
        GenerationError::malformed_parameter(path, format!("parameter '{name}' missing 'in'"))
    })?;
    let location = location_token
        .parse::<ParameterLocation>()
        .map_err(|_| GenerationError::UnknownParameterLocation {
            path: path.to_string(),
            name: name.clone(),
            location: location_token.to_string(),
        })?;

    // Path slots cannot be omitted, whatever the document says
    let required = location == ParameterLocation::Path
        || param
            .get("required")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);

    let param_type = match param.get("schema") {
        Some(schema) => classify_schema(path, &name, &resolve_schema(schema)?)?,
        None => classify_schema(path, &name, &JsonValue::Object(param.clone()))?,
    };

    Ok(Parameter {
        name,
        location,
        required,
        param_type,
    })
}

fn classify_schema(
    path: &str,
    name: &str,
    schema: &JsonValue,
) -> Result<ParameterType, GenerationError> {
    let unsupported = |detail: String| GenerationError::malformed_parameter(path, detail);

    match schema.get("type") {
        Some(JsonValue::String(schema_type)) => {
            ParameterType::from_schema_type(schema_type).ok_or_else(|| {
                unsupported(format!(
                    "parameter '{name}' has unsupported type '{schema_type}'"
                ))
            })
        }
        // OpenAPI 3.1 nullable form: ["string", "null"]
        Some(JsonValue::Array(types)) => types
            .iter()
            .filter_map(JsonValue::as_str)
            .find(|t| *t != "null")
            .and_then(ParameterType::from_schema_type)
            .ok_or_else(|| unsupported(format!("parameter '{name}' has no usable type"))),
        Some(_) => Err(unsupported(format!("parameter '{name}' has a non-string type"))),
        None => {
            let declares = |key: &str| schema.get(key).is_some();
            if declares("items") {
                Ok(ParameterType::Array)
            } else if ["properties", "allOf", "oneOf", "anyOf"]
                .into_iter()
                .any(declares)
            {
                Ok(ParameterType::Object)
            } else {
                Err(unsupported(format!("parameter '{name}' has no schema or type")))
            }
        }
    }
}
