//! Common test utilities for building node definitions.
use govflow::prelude::*;

/// A typical definition: wait for completion with a five-minute window.
#[allow(dead_code)]
pub fn ingest_users_definition() -> RunIngestionPipelineTaskDefinition {
    RunIngestionPipelineTaskDefinition {
        name: "ingest_users".to_string(),
        config: IngestionPipelineConfig {
            wait_for_completion: true,
            timeout_seconds: 300,
        },
        input_namespace_map: NamespaceMap::new(),
    }
}

/// Fire-and-forget variant: no wait, zero timeout.
#[allow(dead_code)]
pub fn fire_and_forget_definition() -> RunIngestionPipelineTaskDefinition {
    RunIngestionPipelineTaskDefinition {
        name: "ingest_users".to_string(),
        config: IngestionPipelineConfig {
            wait_for_completion: false,
            timeout_seconds: 0,
        },
        input_namespace_map: NamespaceMap::new(),
    }
}

/// Definition whose inputs are bound to an upstream node.
#[allow(dead_code)]
pub fn definition_with_bindings() -> RunIngestionPipelineTaskDefinition {
    let mut map = NamespaceMap::new();
    map.insert("table".to_string(), "upstream_node".to_string());
    RunIngestionPipelineTaskDefinition {
        name: "ingest_tables".to_string(),
        config: IngestionPipelineConfig {
            wait_for_completion: true,
            timeout_seconds: 60,
        },
        input_namespace_map: map,
    }
}

/// Pulls the single service task out of an assembled node's sub-process.
#[allow(dead_code)]
pub fn service_task_of(node: &RunIngestionPipelineTask) -> ServiceTask {
    node.sub_process()
        .flow_elements()
        .iter()
        .find_map(|e| match e {
            FlowElement::ServiceTask(task) => Some(task.clone()),
            _ => None,
        })
        .expect("assembled sub-process should contain a service task")
}
