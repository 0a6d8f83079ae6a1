use serde::{Deserialize, Serialize};
use std::fmt;

/// A start event marking the entry point of a process or sub-process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartEvent {
    pub id: String,
}

/// An end event marking a termination point of a process or sub-process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndEvent {
    pub id: String,
}

/// The value bound to a field extension: either a literal or an expression
/// resolved by the engine at task execution time. A single field extension
/// carries exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldBinding {
    Literal(String),
    Expression(String),
}

/// A named parameter attached to a service task and looked up by the
/// downstream executor by its exact field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldExtension {
    pub field_name: String,
    pub binding: FieldBinding,
}

impl FieldExtension {
    /// The literal value, if this field carries one.
    pub fn field_value(&self) -> Option<&str> {
        match &self.binding {
            FieldBinding::Literal(value) => Some(value),
            FieldBinding::Expression(_) => None,
        }
    }

    /// The expression, if this field carries one.
    pub fn expression(&self) -> Option<&str> {
        match &self.binding {
            FieldBinding::Literal(_) => None,
            FieldBinding::Expression(expr) => Some(expr),
        }
    }
}

/// A task whose execution delegates to an external executor selected by a
/// stable implementation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTask {
    pub id: String,
    /// Registry key of the executor the engine dispatches to.
    pub implementation: String,
    /// When true the engine must run the task on a worker thread instead of
    /// its own scheduling thread.
    pub asynchronous: bool,
    /// Parameters for the executor, in insertion order.
    pub field_extensions: Vec<FieldExtension>,
}

impl ServiceTask {
    /// Looks up a field extension by its exact name.
    pub fn field(&self, field_name: &str) -> Option<&FieldExtension> {
        self.field_extensions
            .iter()
            .find(|f| f.field_name == field_name)
    }
}

/// A directed edge between two elements of the same container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceFlow {
    pub id: String,
    pub source_ref: String,
    pub target_ref: String,
}

impl SequenceFlow {
    /// Creates a flow from `source` to `target` with a derived id.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source_ref = source.into();
        let target_ref = target.into();
        SequenceFlow {
            id: format!("{}-{}", source_ref, target_ref),
            source_ref,
            target_ref,
        }
    }
}

/// An event attached to the perimeter of a container element, intercepting a
/// condition (identified by `error_ref`) that escapes the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryEvent {
    pub id: String,
    /// Id of the element the event is attached to.
    pub attached_to_ref: String,
    /// Name of the error condition this event intercepts.
    pub error_ref: String,
    /// Whether triggering the event cancels the attached activity.
    pub cancel_activity: bool,
}

/// A composite element owning a private graph of flow elements, itself a
/// single element in its enclosing process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProcess {
    pub id: String,
    flow_elements: Vec<FlowElement>,
}

impl SubProcess {
    pub fn new(id: impl Into<String>) -> Self {
        SubProcess {
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

/// The closed set of element kinds a container can own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowElement {
    StartEvent(StartEvent),
    EndEvent(EndEvent),
    ServiceTask(ServiceTask),
    SequenceFlow(SequenceFlow),
    SubProcess(SubProcess),
    BoundaryEvent(BoundaryEvent),
}

impl FlowElement {
    pub fn id(&self) -> &str {
        match self {
            FlowElement::StartEvent(e) => &e.id,
            FlowElement::EndEvent(e) => &e.id,
            FlowElement::ServiceTask(e) => &e.id,
            FlowElement::SequenceFlow(e) => &e.id,
            FlowElement::SubProcess(e) => &e.id,
            FlowElement::BoundaryEvent(e) => &e.id,
        }
    }

    /// True for elements that occupy a position in the sequence graph, as
    /// opposed to edges and attached boundary events.
    pub fn is_sequence_node(&self) -> bool {
        !matches!(
            self,
            FlowElement::SequenceFlow(_) | FlowElement::BoundaryEvent(_)
        )
    }
}

impl fmt::Display for FlowElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            FlowElement::StartEvent(_) => "startEvent",
            FlowElement::EndEvent(_) => "endEvent",
            FlowElement::ServiceTask(_) => "serviceTask",
            FlowElement::SequenceFlow(_) => "sequenceFlow",
            FlowElement::SubProcess(_) => "subProcess",
            FlowElement::BoundaryEvent(_) => "boundaryEvent",
        };
        write!(f, "{}[{}]", kind, self.id())
    }
}
