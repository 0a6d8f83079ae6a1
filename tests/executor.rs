//! Tests for field decoding, registry dispatch, and the ingestion executor.
mod common;
use common::*;
use govflow::executor::fields::IngestionTaskFields;
use govflow::executor::RunIngestionPipelineExecutor;
use govflow::prelude::*;
use std::result::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Client stub that replays a scripted sequence of run states; the last
/// state repeats once the script is exhausted.
struct StubClient {
    states: Mutex<Vec<RunState>>,
    triggered: Mutex<Vec<NamespaceMap>>,
}

impl StubClient {
    fn with_states(states: Vec<RunState>) -> Self {
        StubClient {
            states: Mutex::new(states),
            triggered: Mutex::new(Vec::new()),
        }
    }
}

impl PipelineServiceClient for StubClient {
    fn trigger(&self, input_namespace_map: &NamespaceMap) -> Result<IngestionRun, ExecutionError> {
        self.triggered.lock().unwrap().push(input_namespace_map.clone());
        Ok(IngestionRun {
            id: "run-1".to_string(),
        })
    }

    fn run_state(&self, _run: &IngestionRun) -> Result<RunState, ExecutionError> {
        let mut states = self.states.lock().unwrap();
        if states.len() > 1 {
            Ok(states.remove(0))
        } else {
            Ok(states[0])
        }
    }
}

fn fast_executor() -> RunIngestionPipelineExecutor {
    RunIngestionPipelineExecutor::with_poll_interval(Duration::from_millis(1))
}

#[test]
fn test_fields_decode_round_trip() {
    let definition = definition_with_bindings();
    let node = RunIngestionPipelineTask::new(&definition).unwrap();
    let task = service_task_of(&node);

    let fields = IngestionTaskFields::decode(&task).unwrap();
    assert_eq!(fields.wait_for_completion, definition.config.wait_for_completion);
    assert_eq!(fields.timeout_seconds, definition.config.timeout_seconds);
    assert_eq!(fields.input_namespace_map, definition.input_namespace_map);
    assert_eq!(fields.pipeline_service_client_expr, "${PipelineServiceClient}");
}

#[test]
fn test_fields_decode_boundary_values() {
    let node = RunIngestionPipelineTask::new(&fire_and_forget_definition()).unwrap();
    let fields = IngestionTaskFields::decode(&service_task_of(&node)).unwrap();
    assert!(!fields.wait_for_completion);
    assert_eq!(fields.timeout_seconds, 0);
    assert!(fields.input_namespace_map.is_empty());
}

#[test]
fn test_decode_rejects_missing_field() {
    let task = govflow::builder::ServiceTaskBuilder::new()
        .id("bare")
        .implementation("runIngestionPipeline")
        .build();
    assert!(matches!(
        IngestionTaskFields::decode(&task),
        Err(ExecutionError::MissingField { field_name, .. })
            if field_name == "waitForCompletionExpr"
    ));
}

#[test]
fn test_registry_dispatches_by_implementation_key() {
    let node = RunIngestionPipelineTask::new(&fire_and_forget_definition()).unwrap();
    let task = service_task_of(&node);

    let client = Arc::new(StubClient::with_states(vec![RunState::Succeeded]));
    let ctx = ExecutionContext::new(client.clone());

    let registry = ExecutorRegistry::with_defaults();
    registry.dispatch(&task, &ctx).unwrap();
    assert_eq!(client.triggered.lock().unwrap().len(), 1);
}

#[test]
fn test_registry_rejects_unknown_key() {
    let task = govflow::builder::ServiceTaskBuilder::new()
        .id("task")
        .implementation("unknownExecutor")
        .build();
    let ctx = ExecutionContext::new(Arc::new(StubClient::with_states(vec![RunState::Succeeded])));
    assert!(matches!(
        ExecutorRegistry::with_defaults().dispatch(&task, &ctx),
        Err(ExecutionError::UnknownExecutor { key }) if key == "unknownExecutor"
    ));
}

#[test]
fn test_wait_for_completion_succeeds() {
    let node = RunIngestionPipelineTask::new(&definition_with_bindings()).unwrap();
    let task = service_task_of(&node);

    let client = Arc::new(StubClient::with_states(vec![
        RunState::Queued,
        RunState::Running,
        RunState::Succeeded,
    ]));
    let ctx = ExecutionContext::new(client.clone());

    fast_executor().run(&task, &ctx).unwrap();

    // The trigger received the node's namespace bindings.
    let triggered = client.triggered.lock().unwrap();
    assert_eq!(
        triggered[0].get("table").map(String::as_str),
        Some("upstream_node")
    );
}

#[test]
fn test_wait_reports_pipeline_failure() {
    let node = RunIngestionPipelineTask::new(&ingest_users_definition()).unwrap();
    let task = service_task_of(&node);

    let ctx = ExecutionContext::new(Arc::new(StubClient::with_states(vec![
        RunState::Running,
        RunState::Failed,
    ])));
    assert!(matches!(
        fast_executor().run(&task, &ctx),
        Err(ExecutionError::PipelineFailed { run_id }) if run_id == "run-1"
    ));
}

#[test]
fn test_zero_timeout_expires_on_first_poll() {
    let mut definition = ingest_users_definition();
    definition.config.timeout_seconds = 0;
    let node = RunIngestionPipelineTask::new(&definition).unwrap();
    let task = service_task_of(&node);

    let ctx = ExecutionContext::new(Arc::new(StubClient::with_states(vec![RunState::Running])));
    assert!(matches!(
        fast_executor().run(&task, &ctx),
        Err(ExecutionError::Timeout { timeout_seconds: 0, .. })
    ));
}

#[test]
fn test_no_wait_ignores_run_state() {
    let node = RunIngestionPipelineTask::new(&fire_and_forget_definition()).unwrap();
    let task = service_task_of(&node);

    // A permanently running pipeline: fire-and-forget still succeeds.
    let ctx = ExecutionContext::new(Arc::new(StubClient::with_states(vec![RunState::Running])));
    fast_executor().run(&task, &ctx).unwrap();
}

#[test]
fn test_unknown_ambient_expression_is_rejected() {
    let ctx = ExecutionContext::new(Arc::new(StubClient::with_states(vec![RunState::Succeeded])));
    assert!(matches!(
        ctx.resolve_pipeline_service_client("${SomethingElse}"),
        Err(ExecutionError::UnknownAmbientObject { expression }) if expression == "${SomethingElse}"
    ));
    assert!(ctx
        .resolve_pipeline_service_client("${PipelineServiceClient}")
        .is_ok());
}
