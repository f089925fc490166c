//! octogen - derive client resource models from OpenAPI path entries
//!
//! A spec path entry is parsed by [`PathProcessor`] into [`PathMetadata`];
//! an [`ApiBuilder`] then folds its registered stages over that metadata to
//! produce an [`ApiBuilderResult`] (class name, interface name and methods)
//! for a source emitter to render.
//!
//! ```
//! use octogen::{ApiBuilder, GeneratorConfig, PathProcessor};
//! use std::collections::HashMap;
//!
//! let item = serde_json::json!({
//!     "get": {
//!         "parameters": [
//!             { "name": "account_id", "in": "path", "required": true, "schema": { "type": "integer" } }
//!         ]
//!     }
//! });
//! let resolver: HashMap<String, serde_json::Value> = HashMap::new();
//! let metadata = PathProcessor::new(&resolver)
//!     .process("/marketplace_listing/accounts/{account_id}", &item)
//!     .unwrap();
//!
//! let result = ApiBuilder::with_default_stages(&GeneratorConfig::default())
//!     .build(&metadata)
//!     .unwrap();
//! assert_eq!(result.interface_name, "IMarketplaceListingAccounts");
//! assert_eq!(result.methods[0].parameters[0].name, "accountId");
//! ```
#![deny(unsafe_code)]

pub mod generation;
pub mod infrastructure;

pub use generation::{
    ApiBuilder, ApiBuilderResult, GenerationError, GeneratorConfig, HttpMethod, MethodResult,
    Parameter, ParameterLocation, ParameterPolicy, ParameterResolver, ParameterType, PathMetadata,
    SpecLoader, Stage, VerbDefinition,
};
pub use infrastructure::openapi::{DocumentResolver, FileSpecLoader, PathProcessor};
