//! Generation domain module - turns one parsed path into a client resource model
//!
//! `ApiBuilder` folds an ordered list of stages over a `PathMetadata`. The
//! stock stages in [`stages`] derive the resource's names and one method per
//! verb; callers may register their own stages alongside them.

pub mod builder;
pub mod config;
pub mod errors;
pub mod stages;
pub mod traits;
pub mod types;
pub mod utils;

pub use builder::*;
pub use config::*;
pub use errors::*;
pub use traits::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn users_metadata() -> PathMetadata {
        let username = || vec![Parameter::path("username", ParameterType::String)];
        PathMetadata::new("/users/{username}")
            .with_verb(HttpMethod::Get, username())
            .with_verb(HttpMethod::Put, username())
            .with_verb(HttpMethod::Delete, username())
    }

    #[test]
    fn test_default_pipeline_builds_full_resource() {
        let builder = ApiBuilder::with_default_stages(&GeneratorConfig::default());
        let result = builder.build(&users_metadata()).unwrap();

        assert_eq!(result.class_name, "Users");
        assert_eq!(result.interface_name, "IUsers");
        let names: Vec<_> = result.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Get", "GetOrCreate", "Delete"]);
        assert!(
            result
                .methods
                .iter()
                .all(|m| m.parameters == vec![Parameter::path("username", ParameterType::String)])
        );
    }

    #[test]
    fn test_metadata_is_not_mutated_by_build() {
        let metadata = users_metadata();
        let before = metadata.clone();

        ApiBuilder::with_default_stages(&GeneratorConfig::default())
            .build(&metadata)
            .unwrap();

        assert_eq!(metadata, before);
    }
}
