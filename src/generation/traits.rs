//! Port interfaces for the generation domain

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::generation::GenerationError;

/// Loads a whole specification document for the path processor to walk
#[async_trait]
pub trait SpecLoader: Send + Sync {
    /// Load a spec document from a source
    async fn load(&self, source: &str) -> Result<JsonValue, GenerationError>;
}

/// Looks up `$ref` targets on behalf of the path processor.
///
/// The processor never walks the shared components section itself; a `None`
/// here is a fatal parse error for the path being processed.
pub trait ParameterResolver: Send + Sync {
    fn resolve(&self, reference: &str) -> Option<JsonValue>;
}
