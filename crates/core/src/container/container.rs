use crate::container::bean::Bean;
use crate::container::injection::InjectionPoint;
use crate::container::registry::BeanRegistry;
use crate::errors::CoreError;
use crate::types::TypeDescriptor;
use std::any::Any;
use std::sync::Arc;

/// Bean container that fills collection injection points by generic type
pub struct Container {
    registry: BeanRegistry,
}

impl Container {
    /// Create an empty container over the standard type hierarchy
    pub fn new() -> Self {
        Self::from_registry(BeanRegistry::new())
    }

    pub fn from_registry(registry: BeanRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BeanRegistry {
        &self.registry
    }

    /// Collect every bean whose declared type is assignable to the element
    /// type of a collection injection point
    pub fn inject_collection(&self, point: &InjectionPoint) -> Result<Vec<Arc<dyn Bean>>, CoreError> {
        let element = point.element_type()?;
        let candidates = self.registry.candidates(element);

        tracing::info!("{} target: {}", point.name, point.target_name());
        tracing::info!(
            "{} candidates: {}",
            point.name,
            candidates.iter().map(|bean| bean.to_string()).collect::<Vec<_>>().join(", ")
        );

        Ok(candidates)
    }

    /// Beans assignable to an arbitrary target type
    pub fn candidates(&self, target: &TypeDescriptor) -> Vec<Arc<dyn Bean>> {
        self.registry.candidates(target)
    }

    /// Resolve a bean by name
    pub fn resolve_named(&self, name: &str) -> Result<Arc<dyn Bean>, CoreError> {
        self.registry.resolve_named(name)
    }

    /// Resolve a bean by name as its concrete type
    pub fn resolve_as<T>(&self, name: &str) -> Result<Arc<T>, CoreError>
    where
        T: Any + Send + Sync,
    {
        self.registry.resolve_as::<T>(name)
    }

    /// Check if the container is properly configured
    pub fn validate(&self) -> Result<(), CoreError> {
        self.registry.validate()
    }

    /// Get the number of registered beans
    pub fn bean_count(&self) -> usize {
        self.registry.bean_count()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("bean_count", &self.bean_count())
            .finish()
    }
}
