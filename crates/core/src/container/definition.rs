use crate::container::bean::Bean;
use crate::types::{resolve_type_name, TypeDescriptor};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Registered bean: its name, declared type and shared instance
#[derive(Clone)]
pub struct BeanDefinition {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub instance: Arc<dyn Bean>,
}

impl BeanDefinition {
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor, instance: Arc<dyn Bean>) -> Self {
        Self {
            name: name.into(),
            descriptor,
            instance,
        }
    }

    /// Borrow the instance as its concrete type
    pub fn instance_as<T: Any>(&self) -> Option<&T> {
        self.instance.as_any().downcast_ref::<T>()
    }

    /// Rendered type name, as attached to the bean's label
    pub fn type_name(&self) -> String {
        resolve_type_name(&self.descriptor)
    }
}

impl fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor.to_string())
            .field("instance", &self.instance.to_string())
            .finish()
    }
}
