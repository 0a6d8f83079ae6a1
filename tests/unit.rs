//! Unit tests for the id namer, the element builders, and error rendering.
use govflow::builder::{FieldExtensionBuilder, ServiceTaskBuilder, StartEventBuilder};
use govflow::model::is_legal_id;
use govflow::prelude::*;

#[test]
fn test_element_id_derivation() {
    assert_eq!(element_id("ingest_users", "startEvent"), "ingest_users.startEvent");
    assert_eq!(
        element_id("ingest_users", "triggerIngestionWorkflow"),
        "ingest_users.triggerIngestionWorkflow"
    );
}

#[test]
fn test_element_id_is_deterministic_and_injective() {
    assert_eq!(element_id("a", "startEvent"), element_id("a", "startEvent"));
    assert_ne!(element_id("a", "startEvent"), element_id("b", "startEvent"));
    assert_ne!(element_id("a", "startEvent"), element_id("a", "endEvent"));
}

#[test]
fn test_id_legality() {
    assert!(is_legal_id("ingest_users"));
    assert!(is_legal_id("a.b-c_d"));
    assert!(!is_legal_id(""));
    assert!(!is_legal_id("has space"));
    assert!(!is_legal_id("has\ttab"));
    assert!(!is_legal_id("has\nnewline"));
}

#[test]
fn test_sequence_flow_derives_id_from_endpoints() {
    let flow = SequenceFlow::new("a", "b");
    assert_eq!(flow.id, "a-b");
    assert_eq!(flow.source_ref, "a");
    assert_eq!(flow.target_ref, "b");
}

#[test]
fn test_field_extension_literal() {
    let field = FieldExtensionBuilder::new()
        .field_name("timeoutSecondsExpr")
        .field_value("300")
        .build();
    assert_eq!(field.field_name, "timeoutSecondsExpr");
    assert_eq!(field.field_value(), Some("300"));
    assert_eq!(field.expression(), None);
}

#[test]
fn test_field_extension_expression() {
    let field = FieldExtensionBuilder::new()
        .field_name("pipelineServiceClientExpr")
        .expression("${PipelineServiceClient}")
        .build();
    assert_eq!(field.field_value(), None);
    assert_eq!(field.expression(), Some("${PipelineServiceClient}"));
}

#[test]
#[should_panic(expected = "both a value and an expression")]
fn test_field_extension_rejects_value_and_expression() {
    FieldExtensionBuilder::new()
        .field_name("broken")
        .field_value("true")
        .expression("${x}")
        .build();
}

#[test]
#[should_panic(expected = "needs a value or an expression")]
fn test_field_extension_rejects_empty_binding() {
    FieldExtensionBuilder::new().field_name("broken").build();
}

#[test]
#[should_panic(expected = "requires an id")]
fn test_start_event_builder_requires_id() {
    StartEventBuilder::new().build();
}

#[test]
#[should_panic(expected = "requires an implementation key")]
fn test_service_task_builder_requires_implementation() {
    ServiceTaskBuilder::new().id("task").build();
}

#[test]
fn test_service_task_preserves_field_order() {
    let task = ServiceTaskBuilder::new()
        .id("task")
        .implementation("noop")
        .add_field_extension(
            FieldExtensionBuilder::new().field_name("first").field_value("1").build(),
        )
        .add_field_extension(
            FieldExtensionBuilder::new().field_name("second").field_value("2").build(),
        )
        .build();
    let names: Vec<&str> = task
        .field_extensions
        .iter()
        .map(|f| f.field_name.as_str())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
    assert!(!task.asynchronous);
}

#[test]
fn test_error_display() {
    let err = ConfigurationError::NegativeTimeout(-1);
    assert!(err.to_string().contains("timeoutSeconds"));
    assert!(err.to_string().contains("-1"));

    let err = ConfigurationError::IllegalNodeName {
        name: "has space".to_string(),
    };
    assert!(err.to_string().contains("has space"));

    let err = ValidationError::DuplicateElementId {
        container_id: "proc".to_string(),
        id: "a".to_string(),
    };
    assert!(err.to_string().contains("proc"));
    assert!(err.to_string().contains('a'));

    let err = ExecutionError::Timeout {
        run_id: "run-1".to_string(),
        timeout_seconds: 300,
    };
    assert!(err.to_string().contains("run-1"));
    assert!(err.to_string().contains("300"));
}

#[test]
fn test_flow_element_display() {
    let element = FlowElement::StartEvent(StartEventBuilder::new().id("n.startEvent").build());
    assert_eq!(format!("{}", element), "startEvent[n.startEvent]");
}
