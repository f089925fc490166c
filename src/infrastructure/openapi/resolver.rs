//! `$ref` lookups handed to the path processor

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::generation::ParameterResolver;

/// Resolves local JSON-pointer references (`#/components/parameters/owner`)
/// against an already loaded document
pub struct DocumentResolver {
    document: JsonValue,
}

impl DocumentResolver {
    pub fn new(document: JsonValue) -> Self {
        Self { document }
    }
}

impl ParameterResolver for DocumentResolver {
    fn resolve(&self, reference: &str) -> Option<JsonValue> {
        // External references are left to the loader
        let pointer = reference.strip_prefix('#')?;
        self.document.pointer(pointer).cloned()
    }
}

/// A pre-resolved table keyed by the full reference string
impl ParameterResolver for HashMap<String, JsonValue> {
    fn resolve(&self, reference: &str) -> Option<JsonValue> {
        self.get(reference).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_resolver() {
        let resolver = DocumentResolver::new(json!({
            "components": {
                "parameters": {
                    "owner": { "name": "owner", "in": "path", "schema": { "type": "string" } }
                }
            }
        }));

        let resolved = resolver.resolve("#/components/parameters/owner").unwrap();
        assert_eq!(resolved["name"], "owner");
        assert!(resolver.resolve("#/components/parameters/repo").is_none());
        assert!(resolver.resolve("other.json#/components/parameters/owner").is_none());
    }

    #[test]
    fn test_table_resolver() {
        let mut table = HashMap::new();
        table.insert("#/p/per-page".to_string(), json!({ "name": "per_page" }));

        assert_eq!(table.resolve("#/p/per-page").unwrap()["name"], "per_page");
        assert!(table.resolve("#/p/page").is_none());
    }
}
