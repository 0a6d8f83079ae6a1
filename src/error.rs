use thiserror::Error;

/// Errors that can occur while constructing a workflow node from its definition.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Node name must not be empty")]
    EmptyNodeName,

    #[error(
        "Node name '{name}' contains characters that are not legal in the element id space (whitespace or control characters)"
    )]
    IllegalNodeName { name: String },

    #[error("Field 'timeoutSeconds' must be non-negative, but was {0}")]
    NegativeTimeout(i64),

    #[error("Failed to encode the input namespace map: {cause}")]
    NamespaceMapEncoding { cause: String },
}

/// Errors reported when a process or sub-process fails its structural checks.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Element id '{id}' occurs more than once within '{container_id}'")]
    DuplicateElementId { container_id: String, id: String },

    #[error(
        "Sequence flow '{flow_id}' references element '{element_id}', which does not exist in '{container_id}'"
    )]
    UnknownFlowEndpoint {
        container_id: String,
        flow_id: String,
        element_id: String,
    },

    #[error(
        "Boundary event '{event_id}' is attached to '{attached_to}', which does not exist in '{container_id}'"
    )]
    UnknownBoundaryAttachment {
        container_id: String,
        event_id: String,
        attached_to: String,
    },

    #[error("Sub-process '{container_id}' has no start event")]
    MissingStartEvent { container_id: String },

    #[error("Sub-process '{container_id}' has no end event")]
    MissingEndEvent { container_id: String },

    #[error("Element '{element_id}' in '{container_id}' is not reachable from a start event")]
    UnreachableElement {
        container_id: String,
        element_id: String,
    },

    #[error("Element '{element_id}' in '{container_id}' cannot reach an end event")]
    DeadEndElement {
        container_id: String,
        element_id: String,
    },
}

/// Errors that can occur while persisting or restoring a workflow artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact serialization failed: {0}")]
    Encode(String),

    #[error("Artifact deserialization failed: {0}")]
    Decode(String),

    #[error("Artifact I/O failed for '{path}': {cause}")]
    Io { path: String, cause: String },
}

/// Errors raised by task executors at engine run time.
///
/// Uncaught executor failures are routed out of the owning sub-process by its
/// runtime-exception boundary event.
#[derive(Error, Debug, Clone)]
pub enum ExecutionError {
    #[error("Service task '{task_id}' is missing required field '{field_name}'")]
    MissingField { task_id: String, field_name: String },

    #[error("Field '{field_name}' could not be decoded: {message}")]
    MalformedField { field_name: String, message: String },

    #[error("Expression '{expression}' does not resolve to a known ambient object")]
    UnknownAmbientObject { expression: String },

    #[error("No executor is registered for implementation key '{key}'")]
    UnknownExecutor { key: String },

    #[error("Ingestion pipeline run '{run_id}' reported failure")]
    PipelineFailed { run_id: String },

    #[error("Ingestion pipeline run '{run_id}' did not complete within {timeout_seconds}s")]
    Timeout { run_id: String, timeout_seconds: i64 },

    #[error("Pipeline service client error: {0}")]
    Client(String),
}
