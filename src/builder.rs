//! Builders for the graph-model primitives.
//!
//! Every builder requires an explicit id; forgetting one, or giving a
//! [`FieldExtensionBuilder`] both a literal value and an expression, is a
//! programming error and panics rather than producing a half-formed element.

use crate::model::{
    BoundaryEvent, EndEvent, FieldBinding, FieldExtension, ServiceTask, StartEvent, SubProcess,
};

#[derive(Debug, Default)]
pub struct StartEventBuilder {
    id: Option<String>,
}

impl StartEventBuilder {
    pub fn new() -> Self {
        StartEventBuilder::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn build(self) -> StartEvent {
        StartEvent {
            id: self.id.expect("StartEventBuilder requires an id"),
        }
    }
}

#[derive(Debug, Default)]
pub struct EndEventBuilder {
    id: Option<String>,
}

impl EndEventBuilder {
    pub fn new() -> Self {
        EndEventBuilder::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn build(self) -> EndEvent {
        EndEvent {
            id: self.id.expect("EndEventBuilder requires an id"),
        }
    }
}

#[derive(Debug, Default)]
pub struct SubProcessBuilder {
    id: Option<String>,
}

impl SubProcessBuilder {
    pub fn new() -> Self {
        SubProcessBuilder::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn build(self) -> SubProcess {
        SubProcess::new(self.id.expect("SubProcessBuilder requires an id"))
    }
}

/// Builds a field extension carrying either a literal value or an expression.
#[derive(Debug, Default)]
pub struct FieldExtensionBuilder {
    field_name: Option<String>,
    field_value: Option<String>,
    expression: Option<String>,
}

impl FieldExtensionBuilder {
    pub fn new() -> Self {
        FieldExtensionBuilder::default()
    }

    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    pub fn field_value(mut self, value: impl Into<String>) -> Self {
        self.field_value = Some(value.into());
        self
    }

    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn build(self) -> FieldExtension {
        let field_name = self.field_name.expect("FieldExtensionBuilder requires a field name");
        let binding = match (self.field_value, self.expression) {
            (Some(value), None) => FieldBinding::Literal(value),
            (None, Some(expression)) => FieldBinding::Expression(expression),
            (Some(_), Some(_)) => {
                panic!("FieldExtensionBuilder for '{field_name}' was given both a value and an expression")
            }
            (None, None) => {
                panic!("FieldExtensionBuilder for '{field_name}' needs a value or an expression")
            }
        };
        FieldExtension {
            field_name,
            binding,
        }
    }
}

/// Builds a service task; the implementation key is mandatory, field
/// extensions keep their insertion order.
#[derive(Debug, Default)]
pub struct ServiceTaskBuilder {
    id: Option<String>,
    implementation: Option<String>,
    asynchronous: bool,
    field_extensions: Vec<FieldExtension>,
}

impl ServiceTaskBuilder {
    pub fn new() -> Self {
        ServiceTaskBuilder::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn implementation(mut self, key: impl Into<String>) -> Self {
        self.implementation = Some(key.into());
        self
    }

    pub fn add_field_extension(mut self, field: FieldExtension) -> Self {
        self.field_extensions.push(field);
        self
    }

    pub fn set_async(mut self, asynchronous: bool) -> Self {
        self.asynchronous = asynchronous;
        self
    }

    pub fn build(self) -> ServiceTask {
        ServiceTask {
            id: self.id.expect("ServiceTaskBuilder requires an id"),
            implementation: self
                .implementation
                .expect("ServiceTaskBuilder requires an implementation key"),
            asynchronous: self.asynchronous,
            field_extensions: self.field_extensions,
        }
    }
}

#[derive(Debug, Default)]
pub struct BoundaryEventBuilder {
    id: Option<String>,
    attached_to_ref: Option<String>,
    error_ref: Option<String>,
    cancel_activity: bool,
}

impl BoundaryEventBuilder {
    pub fn new() -> Self {
        BoundaryEventBuilder {
            cancel_activity: true,
            ..BoundaryEventBuilder::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attached_to(mut self, element_id: impl Into<String>) -> Self {
        self.attached_to_ref = Some(element_id.into());
        self
    }

    pub fn error_ref(mut self, error_ref: impl Into<String>) -> Self {
        self.error_ref = Some(error_ref.into());
        self
    }

    pub fn cancel_activity(mut self, cancel: bool) -> Self {
        self.cancel_activity = cancel;
        self
    }

    pub fn build(self) -> BoundaryEvent {
        BoundaryEvent {
            id: self.id.expect("BoundaryEventBuilder requires an id"),
            attached_to_ref: self
                .attached_to_ref
                .expect("BoundaryEventBuilder requires an attached element"),
            error_ref: self
                .error_ref
                .expect("BoundaryEventBuilder requires an error reference"),
            cancel_activity: self.cancel_activity,
        }
    }
}
