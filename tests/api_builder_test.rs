use std::thread;

use octogen::{
    ApiBuilder, ApiBuilderResult, DocumentResolver, GenerationError, GeneratorConfig, HttpMethod,
    Parameter, ParameterType, PathMetadata, PathProcessor,
    generation::stages::{add_method_for_each_verb, add_type_names},
};
use serde_json::Value as JsonValue;

fn account_metadata() -> PathMetadata {
    PathMetadata::new("/marketplace_listing/accounts/{account_id}").with_verb(
        HttpMethod::Get,
        vec![Parameter::path("account_id", ParameterType::Number)],
    )
}

fn load_get_put_delete_route() -> PathMetadata {
    let document: JsonValue =
        serde_json::from_str(include_str!("fixtures/example-get-put-delete-route.json")).unwrap();
    let resolver = DocumentResolver::new(document.clone());
    let (path, item) = document["paths"].as_object().unwrap().iter().next().unwrap();
    PathProcessor::new(&resolver).process(path, item).unwrap()
}

#[test]
fn test_register_setting_property_is_invoked() {
    let mut builder = ApiBuilder::new();
    builder.register(|_, mut data| {
        data.interface_name = "Monkey".to_string();
        Ok(data)
    });

    let result = builder.build(&PathMetadata::default()).unwrap();

    assert_eq!(result.interface_name, "Monkey");
}

#[test]
fn test_register_using_property_from_input_passes_metadata() {
    let mut builder = ApiBuilder::new();
    builder.register(|metadata, mut data| {
        data.interface_name = metadata.path.clone();
        Ok(data)
    });

    let result = builder.build(&PathMetadata::new("some-path")).unwrap();

    assert_eq!(result.interface_name, "some-path");
}

#[test]
fn test_register_formats_interface_and_type_using_path() {
    let mut builder = ApiBuilder::new();
    builder.register(add_type_names);

    let result = builder.build(&account_metadata()).unwrap();

    assert_eq!(result.class_name, "MarketplaceListingAccounts");
    assert_eq!(result.interface_name, "IMarketplaceListingAccounts");
}

#[test]
fn test_register_adds_method_representing_get() {
    let mut builder = ApiBuilder::new();
    builder.register(add_method_for_each_verb);

    let result = builder.build(&account_metadata()).unwrap();

    assert_eq!(result.methods.len(), 1);
    let method = &result.methods[0];
    assert_eq!(method.name, "Get");
    assert_eq!(method.parameters.len(), 1);
    assert_eq!(method.parameters[0].name, "accountId");
    assert_eq!(method.parameters[0].param_type, ParameterType::Number);
}

#[test]
fn test_build_for_path_with_multiple_methods() {
    let metadata = load_get_put_delete_route();

    let mut builder = ApiBuilder::new();
    builder.register(add_method_for_each_verb);
    let result = builder.build(&metadata).unwrap();

    assert_eq!(result.methods.len(), 3);
    for name in ["Get", "Delete", "GetOrCreate"] {
        let matching: Vec<_> = result.methods.iter().filter(|m| m.name == name).collect();
        assert_eq!(matching.len(), 1, "expected exactly one {name} method");
        let parameters = &matching[0].parameters;
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "username");
        assert_eq!(parameters[0].param_type, ParameterType::String);
    }
}

#[test]
fn test_build_is_deterministic() {
    let builder = ApiBuilder::with_default_stages(&GeneratorConfig::default());
    let metadata = load_get_put_delete_route();

    let first = builder.build(&metadata).unwrap();
    let second = builder.build(&metadata).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.class_name, "UserFollowing");
    assert_eq!(first.interface_name, "IUserFollowing");
}

#[test]
fn test_last_registered_stage_wins() {
    let mut builder = ApiBuilder::new();
    builder.register(add_type_names).register(|_, mut data| {
        data.interface_name = "IOverride".to_string();
        Ok(data)
    });

    let result = builder.build(&account_metadata()).unwrap();

    assert_eq!(result.class_name, "MarketplaceListingAccounts");
    assert_eq!(result.interface_name, "IOverride");
}

#[test]
fn test_stage_error_aborts_build() {
    let builder = ApiBuilder::with_default_stages(&GeneratorConfig::default());

    let result = builder.build(&PathMetadata::new("/{owner}/{repo}"));

    assert!(matches!(result, Err(GenerationError::UnnameablePath(_))));
}

#[test]
fn test_builders_are_isolated_across_threads() {
    let metadata = account_metadata();

    let mut naming = ApiBuilder::new();
    naming.register(add_type_names);
    let mut methods = ApiBuilder::new();
    methods.register(add_method_for_each_verb);

    let (named, with_methods) = thread::scope(|scope| {
        let named = scope.spawn(|| naming.build(&metadata));
        let with_methods = scope.spawn(|| methods.build(&metadata));
        (named.join().unwrap(), with_methods.join().unwrap())
    });

    let named = named.unwrap();
    assert_eq!(named.class_name, "MarketplaceListingAccounts");
    assert!(named.methods.is_empty());

    let with_methods = with_methods.unwrap();
    assert!(with_methods.class_name.is_empty());
    assert!(with_methods.interface_name.is_empty());
    assert_eq!(with_methods.methods.len(), 1);
}

#[test]
fn test_result_serializes_for_emitter() {
    let builder = ApiBuilder::with_default_stages(&GeneratorConfig::default());
    let result: ApiBuilderResult = builder.build(&account_metadata()).unwrap();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "className": "MarketplaceListingAccounts",
            "interfaceName": "IMarketplaceListingAccounts",
            "methods": [{
                "name": "Get",
                "parameters": [{
                    "name": "accountId",
                    "in": "path",
                    "required": true,
                    "type": "number"
                }]
            }]
        })
    );
}
