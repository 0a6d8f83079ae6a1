use serde::{Deserialize, Serialize};

use super::element::{FlowElement, SequenceFlow};

/// A top-level process: the container that node sub-graphs are attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    flow_elements: Vec<FlowElement>,
}

impl Process {
    pub fn new(id: impl Into<String>) -> Self {
        Process {
            id: id.into(),
            flow_elements: Vec::new(),
        }
    }

    /// Appends an element, preserving insertion order.
    pub fn add_flow_element(&mut self, element: FlowElement) {
        self.flow_elements.push(element);
    }

    pub fn flow_elements(&self) -> &[FlowElement] {
        &self.flow_elements
    }

    pub fn find_element(&self, id: &str) -> Option<&FlowElement> {
        self.flow_elements.iter().find(|e| e.id() == id)
    }

    pub fn sequence_flows(&self) -> impl Iterator<Item = &SequenceFlow> {
        self.flow_elements.iter().filter_map(|e| match e {
            FlowElement::SequenceFlow(flow) => Some(flow),
            _ => None,
        })
    }
}

/// The assembled in-memory graph handed to the engine: one or more processes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowModel {
    processes: Vec<Process>,
}

impl WorkflowModel {
    pub fn new() -> Self {
        WorkflowModel::default()
    }

    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The first process added to the model, by convention the main one.
    pub fn main_process(&self) -> Option<&Process> {
        self.processes.first()
    }

    pub fn find_process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }
}
