//! # Govflow - Workflow Graph Assembly for Governance Automation
//!
//! **Govflow** assembles BPMN-style workflow process graphs in memory from
//! plain node definitions. Each node assembler emits a self-contained
//! sub-process fragment (events, service tasks, sequence flows, and a
//! runtime-exception boundary event) that an external workflow engine can
//! execute. Construction is pure: a definition goes in, an immutable
//! sub-graph comes out, and the fragment is attached to a host process
//! exactly once.
//!
//! ## Core Workflow
//!
//! 1.  **Define**: Parse or build a node definition such as
//!     [`RunIngestionPipelineTaskDefinition`](definition::RunIngestionPipelineTaskDefinition).
//!     Definitions carry everything the downstream executor needs: the wait
//!     flag, the timeout, and the input namespace map.
//! 2.  **Assemble**: Construct the node
//!     ([`RunIngestionPipelineTask`](nodes::RunIngestionPipelineTask)); it
//!     validates the definition and builds its sub-process and boundary
//!     event.
//! 3.  **Attach**: Hand the node to a [`Workflow`](workflow::Workflow)
//!     builder, which inserts the fragment into the enclosing process and
//!     validates the resulting graph.
//! 4.  **Hand off**: Serialize the model as a
//!     [`WorkflowArtifact`](artifact::WorkflowArtifact) for the engine, or
//!     dispatch its service tasks through an
//!     [`ExecutorRegistry`](executor::ExecutorRegistry) in tests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use govflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Define the node. The name becomes the sub-process id and the
//!     //    prefix of every derived element id.
//!     let definition = RunIngestionPipelineTaskDefinition {
//!         name: "ingest_users".to_string(),
//!         config: IngestionPipelineConfig {
//!             wait_for_completion: true,
//!             timeout_seconds: 300,
//!         },
//!         input_namespace_map: NamespaceMap::new(),
//!     };
//!
//!     // 2. Assemble the sub-graph fragment.
//!     let node = RunIngestionPipelineTask::new(&definition)?;
//!
//!     // 3. Attach it to an enclosing process.
//!     let workflow = Workflow::builder("user_governance")
//!         .add_node(&node)
//!         .build()?;
//!
//!     // 4. Persist the model for the engine.
//!     let artifact = WorkflowArtifact::new(workflow.into_model());
//!     artifact.save("user_governance.wf")?;
//!
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod builder;
pub mod definition;
pub mod error;
pub mod executor;
pub mod model;
pub mod nodes;
pub mod pipeline;
pub mod prelude;
pub mod workflow;
