//! Assembler for the run-ingestion-pipeline node.

use crate::builder::{
    EndEventBuilder, FieldExtensionBuilder, ServiceTaskBuilder, StartEventBuilder,
    SubProcessBuilder,
};
use crate::definition::RunIngestionPipelineTaskDefinition;
use crate::error::ConfigurationError;
use crate::executor::fields::{
    INPUT_NAMESPACE_MAP_EXPR, PIPELINE_SERVICE_CLIENT_EXPR, TIMEOUT_SECONDS_EXPR,
    WAIT_FOR_COMPLETION_EXPR,
};
use crate::executor::RUN_INGESTION_PIPELINE;
use crate::model::{
    element_id, BoundaryEvent, FlowElement, Process, SequenceFlow, ServiceTask, SubProcess,
    WorkflowModel,
};
use crate::nodes::{runtime_exception_boundary_event, WorkflowNode};
use crate::pipeline::pipeline_service_client_expression;

/// Emits the sub-graph that triggers an ingestion pipeline on the remote
/// pipeline service and, optionally, waits for it to finish.
///
/// The assembled sub-process holds a start event, one asynchronous service
/// task carrying the executor's parameterization, and an end event; uncaught
/// runtime failures of the task leave through the node's boundary event.
pub struct RunIngestionPipelineTask {
    sub_process: SubProcess,
    runtime_exception_boundary_event: BoundaryEvent,
}

impl RunIngestionPipelineTask {
    pub fn new(
        definition: &RunIngestionPipelineTaskDefinition,
    ) -> Result<Self, ConfigurationError> {
        definition.validate()?;

        let sub_process_id = definition.name.as_str();
        let mut sub_process = SubProcessBuilder::new().id(sub_process_id).build();

        let start_event = StartEventBuilder::new()
            .id(element_id(sub_process_id, "startEvent"))
            .build();

        let trigger_task = Self::trigger_service_task(
            sub_process_id,
            definition.config.wait_for_completion,
            definition.config.timeout_seconds,
            definition.encoded_namespace_map()?,
        );

        let end_event = EndEventBuilder::new()
            .id(element_id(sub_process_id, "endEvent"))
            .build();

        let start_to_trigger = SequenceFlow::new(start_event.id.as_str(), trigger_task.id.as_str());
        let trigger_to_end = SequenceFlow::new(trigger_task.id.as_str(), end_event.id.as_str());

        sub_process.add_flow_element(FlowElement::StartEvent(start_event));
        sub_process.add_flow_element(FlowElement::ServiceTask(trigger_task));
        sub_process.add_flow_element(FlowElement::EndEvent(end_event));
        sub_process.add_flow_element(FlowElement::SequenceFlow(start_to_trigger));
        sub_process.add_flow_element(FlowElement::SequenceFlow(trigger_to_end));

        let runtime_exception_boundary_event = runtime_exception_boundary_event(&sub_process);

        Ok(RunIngestionPipelineTask {
            sub_process,
            runtime_exception_boundary_event,
        })
    }

    /// The service task invoking the ingestion-trigger executor. Asynchronous
    /// so that an executor waiting out its timeout occupies a worker thread,
    /// not the engine's scheduling thread.
    fn trigger_service_task(
        sub_process_id: &str,
        wait_for_completion: bool,
        timeout_seconds: i64,
        input_namespace_map: String,
    ) -> ServiceTask {
        let wait_expr = FieldExtensionBuilder::new()
            .field_name(WAIT_FOR_COMPLETION_EXPR)
            .field_value(wait_for_completion.to_string())
            .build();

        let timeout_seconds_expr = FieldExtensionBuilder::new()
            .field_name(TIMEOUT_SECONDS_EXPR)
            .field_value(timeout_seconds.to_string())
            .build();

        let input_namespace_map_expr = FieldExtensionBuilder::new()
            .field_name(INPUT_NAMESPACE_MAP_EXPR)
            .field_value(input_namespace_map)
            .build();

        let pipeline_service_client_expr = FieldExtensionBuilder::new()
            .field_name(PIPELINE_SERVICE_CLIENT_EXPR)
            .expression(pipeline_service_client_expression())
            .build();

        ServiceTaskBuilder::new()
            .id(element_id(sub_process_id, "triggerIngestionWorkflow"))
            .implementation(RUN_INGESTION_PIPELINE)
            .add_field_extension(wait_expr)
            .add_field_extension(timeout_seconds_expr)
            .add_field_extension(input_namespace_map_expr)
            .add_field_extension(pipeline_service_client_expr)
            .set_async(true)
            .build()
    }

    /// The assembled sub-process fragment.
    pub fn sub_process(&self) -> &SubProcess {
        &self.sub_process
    }
}

impl WorkflowNode for RunIngestionPipelineTask {
    fn id(&self) -> &str {
        &self.sub_process.id
    }

    fn runtime_exception_boundary_event(&self) -> &BoundaryEvent {
        &self.runtime_exception_boundary_event
    }

    fn add_to_workflow(&self, _model: &mut WorkflowModel, process: &mut Process) {
        process.add_flow_element(FlowElement::SubProcess(self.sub_process.clone()));
        process.add_flow_element(FlowElement::BoundaryEvent(
            self.runtime_exception_boundary_event.clone(),
        ));
    }
}
