//! Host-process integration.
//!
//! A [`Workflow`] owns the enclosing process that node sub-graphs are
//! attached to. Nodes are attached through the builder; `build` runs the
//! structural checks and freezes the model.

use crate::error::ValidationError;
use crate::model::{validate_process, FlowElement, Process, SequenceFlow, WorkflowModel};
use crate::nodes::WorkflowNode;

/// An assembled workflow: a validated model ready for engine hand-off.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    model: WorkflowModel,
}

impl Workflow {
    pub fn builder(id: impl Into<String>) -> WorkflowBuilder {
        WorkflowBuilder::new(id)
    }

    pub fn model(&self) -> &WorkflowModel {
        &self.model
    }

    pub fn into_model(self) -> WorkflowModel {
        self.model
    }
}

/// Accumulates node fragments and process-level edges for one workflow.
pub struct WorkflowBuilder {
    model: WorkflowModel,
    process: Process,
}

impl WorkflowBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        WorkflowBuilder {
            model: WorkflowModel::new(),
            process: Process::new(id),
        }
    }

    /// Attaches a node's sub-process and boundary event to the enclosing
    /// process. Each node instance is attached exactly once.
    pub fn add_node(mut self, node: &dyn WorkflowNode) -> Self {
        node.add_to_workflow(&mut self.model, &mut self.process);
        self
    }

    /// Adds a process-level sequence flow between two attached nodes (or any
    /// two process-level elements).
    pub fn add_edge(mut self, source_id: &str, target_id: &str) -> Self {
        self.process
            .add_flow_element(FlowElement::SequenceFlow(SequenceFlow::new(
                source_id, target_id,
            )));
        self
    }

    /// Validates the assembled process and yields the finished workflow.
    pub fn build(mut self) -> Result<Workflow, ValidationError> {
        validate_process(&self.process)?;
        self.model.add_process(self.process);
        Ok(Workflow { model: self.model })
    }
}
