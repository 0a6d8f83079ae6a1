//! Task executors and their registry.
//!
//! Assembled service tasks name their executor by a stable implementation
//! key; at run time the engine resolves the key through an
//! [`ExecutorRegistry`] and dispatches to the matching [`TaskExecutor`].
//! Keeping the indirection behind a registry (rather than reflective class
//! lookup) keeps the graph serializable and the executor set explicit.

pub mod fields;
pub mod ingestion;

pub use ingestion::RunIngestionPipelineExecutor;

use ahash::AHashMap;
use std::sync::Arc;

use crate::error::ExecutionError;
use crate::model::ServiceTask;
use crate::pipeline::{pipeline_service_client_expression, PipelineServiceClient};

/// Implementation key of the ingestion-trigger executor.
pub const RUN_INGESTION_PIPELINE: &str = "runIngestionPipeline";

/// Ambient objects the engine exposes to executors for one task execution.
pub struct ExecutionContext {
    pipeline_service_client: Arc<dyn PipelineServiceClient>,
}

impl ExecutionContext {
    pub fn new(pipeline_service_client: Arc<dyn PipelineServiceClient>) -> Self {
        ExecutionContext {
            pipeline_service_client,
        }
    }

    /// Resolves an engine expression to the ambient pipeline-service client.
    /// Only the fixed client expression is recognized at this layer.
    pub fn resolve_pipeline_service_client(
        &self,
        expression: &str,
    ) -> Result<&dyn PipelineServiceClient, ExecutionError> {
        if expression == pipeline_service_client_expression() {
            Ok(self.pipeline_service_client.as_ref())
        } else {
            Err(ExecutionError::UnknownAmbientObject {
                expression: expression.to_string(),
            })
        }
    }
}

/// A unit of work the engine can dispatch a service task to.
pub trait TaskExecutor: Send + Sync {
    /// The stable key service tasks reference this executor by.
    fn key(&self) -> &'static str;

    /// Runs the task. Errors escape the owning sub-process through its
    /// runtime-exception boundary event.
    fn run(&self, task: &ServiceTask, ctx: &ExecutionContext) -> Result<(), ExecutionError>;
}

/// Maps implementation keys to executors.
pub struct ExecutorRegistry {
    executors: AHashMap<String, Arc<dyn TaskExecutor>>,
}

impl ExecutorRegistry {
    pub fn new() -> Self {
        ExecutorRegistry {
            executors: AHashMap::new(),
        }
    }

    /// A registry pre-populated with the built-in executors.
    pub fn with_defaults() -> Self {
        let mut registry = ExecutorRegistry::new();
        registry.register(Arc::new(RunIngestionPipelineExecutor::new()));
        registry
    }

    pub fn register(&mut self, executor: Arc<dyn TaskExecutor>) {
        self.executors.insert(executor.key().to_string(), executor);
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn TaskExecutor>> {
        self.executors.get(key).cloned()
    }

    pub fn registered_keys(&self) -> Vec<String> {
        self.executors.keys().cloned().collect()
    }

    /// Dispatches a service task to the executor its implementation key
    /// names.
    pub fn dispatch(
        &self,
        task: &ServiceTask,
        ctx: &ExecutionContext,
    ) -> Result<(), ExecutionError> {
        let executor =
            self.get(&task.implementation)
                .ok_or_else(|| ExecutionError::UnknownExecutor {
                    key: task.implementation.clone(),
                })?;
        executor.run(task, ctx)
    }
}

impl Default for ExecutorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
