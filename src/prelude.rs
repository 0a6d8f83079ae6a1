//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to define, assemble, and persist a
//! workflow, so a single `use govflow::prelude::*;` covers the common path.

// Definitions and assembly
pub use crate::definition::{
    IngestionPipelineConfig, NamespaceMap, RunIngestionPipelineTaskDefinition,
};
pub use crate::nodes::{RunIngestionPipelineTask, WorkflowNode};
pub use crate::workflow::{Workflow, WorkflowBuilder};

// Graph model
pub use crate::model::{
    element_id, BoundaryEvent, EndEvent, FieldBinding, FieldExtension, FlowElement, Process,
    SequenceFlow, ServiceTask, StartEvent, SubProcess, WorkflowModel,
};

// Engine-side seams
pub use crate::executor::{ExecutionContext, ExecutorRegistry, TaskExecutor};
pub use crate::pipeline::{IngestionRun, PipelineServiceClient, RunState};

// Persistence
pub use crate::artifact::WorkflowArtifact;

// Error types
pub use crate::error::{ArtifactError, ConfigurationError, ExecutionError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
