//! Derives one client method per verb declared on the path

use std::sync::Arc;

use crate::generation::{
    ApiBuilderResult, GenerationError, GeneratorConfig, MethodResult, Parameter,
    ParameterLocation, ParameterPolicy, PathMetadata, Stage, VerbDefinition,
    utils::to_camel_case,
};

/// Rename a parameter to the client's identifier casing; type and
/// requiredness are carried over untouched.
fn translate_parameter(parameter: &Parameter) -> Parameter {
    Parameter {
        name: to_camel_case(&parameter.name),
        ..parameter.clone()
    }
}

fn translate_verb(verb: &VerbDefinition, config: &GeneratorConfig) -> MethodResult {
    let parameters = verb
        .parameters
        .iter()
        .filter(|p| match config.parameters {
            ParameterPolicy::PathOnly => p.location == ParameterLocation::Path,
            ParameterPolicy::All => true,
        })
        .map(translate_parameter)
        .collect();

    MethodResult {
        name: config.method_name(verb.method),
        parameters,
    }
}

/// Method stage configured with the verb naming table and parameter policy
pub fn method_stage(config: &GeneratorConfig) -> Stage {
    let config = config.clone();

    Arc::new(move |metadata: &PathMetadata, mut result: ApiBuilderResult| {
        for verb in &metadata.verbs {
            let method = translate_verb(verb, &config);
            tracing::debug!(
                path = %metadata.path,
                verb = %verb.method,
                method = %method.name,
                parameters = method.parameters.len(),
                "Derived method"
            );
            result.methods.push(method);
        }
        Ok(result)
    })
}

/// Method stage with the stock configuration
pub fn add_method_for_each_verb(
    metadata: &PathMetadata,
    result: ApiBuilderResult,
) -> Result<ApiBuilderResult, GenerationError> {
    method_stage(&GeneratorConfig::default())(metadata, result)
}
