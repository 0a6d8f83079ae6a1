//! The pipeline-service client seam.
//!
//! The client is an ambient object injected by the host engine; assembled
//! graphs reference it by expression rather than holding it directly, so the
//! same graph can run against any deployment's client.

use serde::{Deserialize, Serialize};

use crate::definition::NamespaceMap;
use crate::error::ExecutionError;

/// Name under which the host engine exposes the ambient client object.
pub const PIPELINE_SERVICE_CLIENT_VAR: &str = "PipelineServiceClient";

/// The engine-syntax expression resolving to the ambient client.
pub fn pipeline_service_client_expression() -> String {
    format!("${{{}}}", PIPELINE_SERVICE_CLIENT_VAR)
}

/// Handle for a pipeline run started through the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionRun {
    pub id: String,
}

/// Lifecycle of a pipeline run as reported by the pipeline service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunState {
    Queued,
    Running,
    Succeeded,
    Failed,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Succeeded | RunState::Failed)
    }
}

/// Client through which executors contact the remote pipeline service.
///
/// Implementations own transport, authentication, and retries; executors only
/// see trigger-and-poll semantics.
pub trait PipelineServiceClient: Send + Sync {
    /// Starts the ingestion pipeline, resolving its inputs through the
    /// supplied namespace map.
    fn trigger(&self, input_namespace_map: &NamespaceMap) -> Result<IngestionRun, ExecutionError>;

    /// Reports the current state of a previously triggered run.
    fn run_state(&self, run: &IngestionRun) -> Result<RunState, ExecutionError>;
}
