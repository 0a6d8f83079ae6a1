//! Typed view of the service-task fields the ingestion executor consumes.
//!
//! Field names are a wire contract with the graph assembler: the executor
//! looks them up by exact name, so the constants here are the single source
//! for both sides.

use crate::definition::NamespaceMap;
use crate::error::ExecutionError;
use crate::model::ServiceTask;

pub const WAIT_FOR_COMPLETION_EXPR: &str = "waitForCompletionExpr";
pub const TIMEOUT_SECONDS_EXPR: &str = "timeoutSecondsExpr";
pub const INPUT_NAMESPACE_MAP_EXPR: &str = "inputNamespaceMapExpr";
pub const PIPELINE_SERVICE_CLIENT_EXPR: &str = "pipelineServiceClientExpr";

/// The decoded parameterization of one run-ingestion-pipeline service task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionTaskFields {
    pub wait_for_completion: bool,
    pub timeout_seconds: i64,
    pub input_namespace_map: NamespaceMap,
    /// The raw client expression, resolved against the execution context.
    pub pipeline_service_client_expr: String,
}

impl IngestionTaskFields {
    /// Decodes the four fields from a service task, by name.
    pub fn decode(task: &ServiceTask) -> Result<Self, ExecutionError> {
        let wait_for_completion = literal(task, WAIT_FOR_COMPLETION_EXPR)?
            .parse::<bool>()
            .map_err(|e| malformed(WAIT_FOR_COMPLETION_EXPR, e.to_string()))?;

        let timeout_seconds = literal(task, TIMEOUT_SECONDS_EXPR)?
            .parse::<i64>()
            .map_err(|e| malformed(TIMEOUT_SECONDS_EXPR, e.to_string()))?;
        if timeout_seconds < 0 {
            return Err(malformed(
                TIMEOUT_SECONDS_EXPR,
                format!("timeout must be non-negative, was {timeout_seconds}"),
            ));
        }

        let input_namespace_map: NamespaceMap =
            serde_json::from_str(literal(task, INPUT_NAMESPACE_MAP_EXPR)?)
                .map_err(|e| malformed(INPUT_NAMESPACE_MAP_EXPR, e.to_string()))?;

        let pipeline_service_client_expr = task
            .field(PIPELINE_SERVICE_CLIENT_EXPR)
            .ok_or_else(|| missing(task, PIPELINE_SERVICE_CLIENT_EXPR))?
            .expression()
            .ok_or_else(|| {
                malformed(
                    PIPELINE_SERVICE_CLIENT_EXPR,
                    "expected an expression field".to_string(),
                )
            })?
            .to_string();

        Ok(IngestionTaskFields {
            wait_for_completion,
            timeout_seconds,
            input_namespace_map,
            pipeline_service_client_expr,
        })
    }
}

fn literal<'a>(task: &'a ServiceTask, field_name: &str) -> Result<&'a str, ExecutionError> {
    task.field(field_name)
        .ok_or_else(|| missing(task, field_name))?
        .field_value()
        .ok_or_else(|| malformed(field_name, "expected a literal field".to_string()))
}

fn missing(task: &ServiceTask, field_name: &str) -> ExecutionError {
    ExecutionError::MissingField {
        task_id: task.id.clone(),
        field_name: field_name.to_string(),
    }
}

fn malformed(field_name: &str, message: String) -> ExecutionError {
    ExecutionError::MalformedField {
        field_name: field_name.to_string(),
        message,
    }
}
