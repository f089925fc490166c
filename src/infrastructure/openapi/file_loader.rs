//! File-based spec loader
//!
//! This loader handles only file I/O and syntax. Walking the paths is done by
//! the `PathProcessor`.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::fs;

use crate::generation::{GenerationError, SpecLoader};

/// Loads JSON or YAML specification documents from local files
pub struct FileSpecLoader;

impl FileSpecLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpecLoader for FileSpecLoader {
    async fn load(&self, source: &str) -> Result<JsonValue, GenerationError> {
        let content = fs::read_to_string(source).await?;

        let document: JsonValue = if source.ends_with(".json") {
            serde_json::from_str(&content)?
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            serde_yaml::from_str(&content)?
        } else {
            // Try JSON first, then YAML
            match serde_json::from_str(&content) {
                Ok(document) => document,
                Err(_) => serde_yaml::from_str(&content)?,
            }
        };

        tracing::debug!(source = %source, "Loaded spec document");
        Ok(document)
    }
}

impl Default for FileSpecLoader {
    fn default() -> Self {
        Self::new()
    }
}
