use crate::errors::CoreError;
use crate::types::names::LIST_TYPE_NAME;
use crate::types::{resolve_type_name, TypeDescriptor};

/// Declaration site that asks the container for a collection of beans,
/// e.g. a field declared as `List<OutBox<Number>>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPoint {
    pub name: String,
    pub descriptor: TypeDescriptor,
}

impl InjectionPoint {
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
        }
    }

    /// Build an injection point from a textual signature
    pub fn parse(name: impl Into<String>, signature: &str) -> Result<Self, CoreError> {
        Ok(Self::new(name, TypeDescriptor::parse(signature)?))
    }

    /// Element type of a collection injection point
    pub fn element_type(&self) -> Result<&TypeDescriptor, CoreError> {
        if self.descriptor.base_name() != Some(LIST_TYPE_NAME) {
            return Err(CoreError::invalid_injection_point(
                &self.name,
                format!("expected a {} of beans, found '{}'", LIST_TYPE_NAME, self.descriptor),
            ));
        }

        match self.descriptor.type_arguments() {
            [element] => Ok(element),
            arguments => Err(CoreError::invalid_injection_point(
                &self.name,
                format!("{} takes one type argument, found {}", LIST_TYPE_NAME, arguments.len()),
            )),
        }
    }

    /// Rendered signature of the declared type
    pub fn target_name(&self) -> String {
        resolve_type_name(&self.descriptor)
    }
}
