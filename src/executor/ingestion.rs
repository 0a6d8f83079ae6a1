//! Executor for the run-ingestion-pipeline service task.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::ExecutionError;
use crate::executor::fields::IngestionTaskFields;
use crate::executor::{ExecutionContext, TaskExecutor, RUN_INGESTION_PIPELINE};
use crate::model::ServiceTask;
use crate::pipeline::{IngestionRun, PipelineServiceClient, RunState};

/// Triggers an ingestion pipeline through the ambient client and, when the
/// task asks for it, blocks until the run finishes or the configured
/// wall-clock window closes.
///
/// The wait is a plain poll loop; the engine schedules this executor on a
/// worker thread (the assembler marks the task asynchronous), so blocking
/// here never stalls the scheduling thread.
pub struct RunIngestionPipelineExecutor {
    poll_interval: Duration,
}

impl RunIngestionPipelineExecutor {
    pub fn new() -> Self {
        RunIngestionPipelineExecutor {
            poll_interval: Duration::from_secs(1),
        }
    }

    /// Overrides the poll cadence of the completion wait.
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        RunIngestionPipelineExecutor { poll_interval }
    }

    fn wait_for_completion(
        &self,
        client: &dyn PipelineServiceClient,
        run: &IngestionRun,
        timeout_seconds: i64,
    ) -> Result<(), ExecutionError> {
        let deadline = Instant::now() + Duration::from_secs(timeout_seconds as u64);
        loop {
            match client.run_state(run)? {
                RunState::Succeeded => return Ok(()),
                RunState::Failed => {
                    return Err(ExecutionError::PipelineFailed {
                        run_id: run.id.clone(),
                    });
                }
                RunState::Queued | RunState::Running => {
                    if Instant::now() >= deadline {
                        return Err(ExecutionError::Timeout {
                            run_id: run.id.clone(),
                            timeout_seconds,
                        });
                    }
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    thread::sleep(self.poll_interval.min(remaining));
                }
            }
        }
    }
}

impl Default for RunIngestionPipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskExecutor for RunIngestionPipelineExecutor {
    fn key(&self) -> &'static str {
        RUN_INGESTION_PIPELINE
    }

    fn run(&self, task: &ServiceTask, ctx: &ExecutionContext) -> Result<(), ExecutionError> {
        let fields = IngestionTaskFields::decode(task)?;
        let client = ctx.resolve_pipeline_service_client(&fields.pipeline_service_client_expr)?;

        let run = client.trigger(&fields.input_namespace_map)?;
        if fields.wait_for_completion {
            self.wait_for_completion(client, &run, fields.timeout_seconds)?;
        }
        Ok(())
    }
}
