//! Workflow node assemblers.
//!
//! A node assembler turns one node definition into the sub-graph fragment the
//! engine will execute, and attaches that fragment to a host process exactly
//! once. Construction is pure and synchronous; nothing here blocks or does
//! I/O.

pub mod ingestion;

pub use ingestion::RunIngestionPipelineTask;

use crate::builder::BoundaryEventBuilder;
use crate::model::{element_id, BoundaryEvent, Process, SubProcess, WorkflowModel};

/// Error reference intercepted by every node's runtime-exception boundary
/// event. The host process routes it into its error-handling sub-graph.
pub const WORKFLOW_RUNTIME_EXCEPTION: &str = "workflowRuntimeException";

/// Common surface of all node assemblers.
pub trait WorkflowNode {
    /// Id of the node's sub-process within the enclosing process.
    fn id(&self) -> &str;

    /// The boundary event the host wires into its error-handling sub-graph.
    /// Returns the same value before and after [`add_to_workflow`].
    ///
    /// [`add_to_workflow`]: WorkflowNode::add_to_workflow
    fn runtime_exception_boundary_event(&self) -> &BoundaryEvent;

    /// Attaches the node's sub-process and boundary event to the enclosing
    /// process. Callers invoke this exactly once per node instance per
    /// process; it is not idempotent.
    fn add_to_workflow(&self, model: &mut WorkflowModel, process: &mut Process);
}

/// Builds the runtime-exception boundary event for a node's sub-process:
/// uncaught runtime failures inside the sub-process cancel it and escape
/// through this event instead of aborting the whole workflow.
pub fn runtime_exception_boundary_event(sub_process: &SubProcess) -> BoundaryEvent {
    BoundaryEventBuilder::new()
        .id(element_id(&sub_process.id, "runtimeExceptionBoundaryEvent"))
        .attached_to(sub_process.id.as_str())
        .error_ref(WORKFLOW_RUNTIME_EXCEPTION)
        .build()
}
