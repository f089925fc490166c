//! Derives the class and interface names of a resource from its path

use std::sync::Arc;

use crate::generation::{
    ApiBuilderResult, GenerationError, GeneratorConfig, PathMetadata, Stage,
    utils::to_proper_case,
};

/// `{name}` segments are path parameter slots, not part of the resource name
fn is_placeholder(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}')
}

/// Joins the literal segments of `path` in capitalized-word casing.
///
/// Returns `None` when the path has no literal segment to name it by.
///
/// ```
/// use octogen::generation::stages::naming::derive_class_name;
///
/// assert_eq!(
///     derive_class_name("/marketplace_listing/accounts/{account_id}").as_deref(),
///     Some("MarketplaceListingAccounts")
/// );
/// assert_eq!(derive_class_name("/{owner}/{repo}"), None);
/// ```
pub fn derive_class_name(path: &str) -> Option<String> {
    let name: String = path
        .split('/')
        .filter(|segment| !segment.is_empty() && !is_placeholder(segment))
        .map(to_proper_case)
        .collect();

    (!name.is_empty()).then_some(name)
}

/// Naming stage configured with the interface prefix and fallback class name
pub fn naming_stage(config: &GeneratorConfig) -> Stage {
    let prefix = config.interface_prefix.clone();
    let fallback = config.fallback_class_name.clone();

    Arc::new(move |metadata: &PathMetadata, mut result: ApiBuilderResult| {
        let class_name = match derive_class_name(&metadata.path) {
            Some(name) => name,
            None => match &fallback {
                Some(name) => {
                    tracing::debug!(
                        path = %metadata.path,
                        fallback = %name,
                        "Using fallback class name"
                    );
                    name.clone()
                }
                None => return Err(GenerationError::UnnameablePath(metadata.path.clone())),
            },
        };

        if !result.class_name.is_empty() && result.class_name != class_name {
            tracing::warn!(
                path = %metadata.path,
                previous = %result.class_name,
                class_name = %class_name,
                "Overwriting class name set by an earlier stage"
            );
        }

        result.interface_name = format!("{prefix}{class_name}");
        result.class_name = class_name;
        Ok(result)
    })
}

/// Naming stage with the stock configuration (`I` interface prefix, no fallback)
pub fn add_type_names(
    metadata: &PathMetadata,
    result: ApiBuilderResult,
) -> Result<ApiBuilderResult, GenerationError> {
    naming_stage(&GeneratorConfig::default())(metadata, result)
}
