//! Ordered stage pipeline that folds over one path's metadata

use std::fmt;
use std::sync::Arc;

use crate::generation::{
    ApiBuilderResult, GeneratorConfig, GenerationError, PathMetadata, stages,
};

/// A single transform applied by [`ApiBuilder::build`].
///
/// Receives the parsed path and the result accumulated so far, and returns the
/// updated result.
pub type Stage = Arc<
    dyn Fn(&PathMetadata, ApiBuilderResult) -> Result<ApiBuilderResult, GenerationError>
        + Send
        + Sync,
>;

/// Holds an ordered, append-only list of stages
#[derive(Clone, Default)]
pub struct ApiBuilder {
    stages: Vec<Stage>,
}

impl ApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with the naming stage followed by the method stage
    pub fn with_default_stages(config: &GeneratorConfig) -> Self {
        let mut builder = Self::new();
        builder
            .register_stage(stages::naming_stage(config))
            .register_stage(stages::method_stage(config));
        builder
    }

    /// Append a stage. The same stage registered twice runs twice.
    pub fn register<F>(&mut self, stage: F) -> &mut Self
    where
        F: Fn(&PathMetadata, ApiBuilderResult) -> Result<ApiBuilderResult, GenerationError>
            + Send
            + Sync
            + 'static,
    {
        self.register_stage(Arc::new(stage))
    }

    /// Append an already shared stage
    pub fn register_stage(&mut self, stage: Stage) -> &mut Self {
        self.stages.push(stage);
        tracing::debug!(position = self.stages.len(), "Registered builder stage");
        self
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Fold every registered stage, in registration order, over a fresh result.
    ///
    /// The first failing stage aborts the build and its error is returned.
    pub fn build(&self, metadata: &PathMetadata) -> Result<ApiBuilderResult, GenerationError> {
        tracing::debug!(
            path = %metadata.path,
            stages = self.stages.len(),
            "Building client resource"
        );

        self.stages
            .iter()
            .enumerate()
            .try_fold(ApiBuilderResult::default(), |result, (index, stage)| {
                tracing::trace!(path = %metadata.path, stage = index, "Applying stage");
                stage(metadata, result)
            })
    }
}

impl fmt::Debug for ApiBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiBuilder")
            .field("stages", &self.stages.len())
            .finish()
    }
}
