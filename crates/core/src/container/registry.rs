use crate::boxes::TypeLabel;
use crate::container::bean::Bean;
use crate::container::definition::BeanDefinition;
use crate::errors::CoreError;
use crate::types::{resolve_type_name, DescribeType, TypeDescriptor, TypeHierarchy};
use std::any::Any;
use std::sync::Arc;

/// Registry of beans keyed by name and matched by declared type.
///
/// Definitions keep their registration order, which is also the order of
/// every candidate list the registry hands out.
#[derive(Debug)]
pub struct BeanRegistry {
    hierarchy: TypeHierarchy,
    definitions: Vec<BeanDefinition>,
}

impl BeanRegistry {
    /// Create a registry over the standard type hierarchy
    pub fn new() -> Self {
        Self::with_hierarchy(TypeHierarchy::standard())
    }

    pub fn with_hierarchy(hierarchy: TypeHierarchy) -> Self {
        Self {
            hierarchy,
            definitions: Vec::new(),
        }
    }

    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    pub fn hierarchy_mut(&mut self) -> &mut TypeHierarchy {
        &mut self.hierarchy
    }

    /// Register a bean under its own descriptor
    pub fn register<B>(&mut self, name: impl Into<String>, bean: B) -> Result<(), CoreError>
    where
        B: Bean + TypeLabel + DescribeType,
    {
        self.register_with_descriptor(name, B::type_descriptor(), bean)
    }

    /// Register a bean under an explicit descriptor.
    ///
    /// Unlabelled beans receive the rendered type name as their label.
    pub fn register_with_descriptor<B>(
        &mut self,
        name: impl Into<String>,
        descriptor: TypeDescriptor,
        mut bean: B,
    ) -> Result<(), CoreError>
    where
        B: Bean + TypeLabel,
    {
        let name = name.into();
        if self.contains(&name) {
            return Err(CoreError::DuplicateBean { name });
        }

        if bean.type_name().is_none() {
            bean.set_type_name(resolve_type_name(&descriptor));
        }

        tracing::debug!("Registering bean '{}' as {}", name, descriptor);
        self.definitions.push(BeanDefinition::new(name, descriptor, Arc::new(bean)));
        Ok(())
    }

    /// Check if a bean with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.iter().any(|definition| definition.name == name)
    }

    /// Get the number of registered beans
    pub fn bean_count(&self) -> usize {
        self.definitions.len()
    }

    pub fn definitions(&self) -> &[BeanDefinition] {
        &self.definitions
    }

    pub fn definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.iter().find(|definition| definition.name == name)
    }

    /// Definitions whose declared type is assignable to `target`
    pub fn matching_definitions(&self, target: &TypeDescriptor) -> Vec<&BeanDefinition> {
        self.definitions
            .iter()
            .filter(|definition| self.hierarchy.is_assignable(&definition.descriptor, target))
            .collect()
    }

    /// Instances whose declared type is assignable to `target`
    pub fn candidates(&self, target: &TypeDescriptor) -> Vec<Arc<dyn Bean>> {
        self.matching_definitions(target)
            .into_iter()
            .map(|definition| Arc::clone(&definition.instance))
            .collect()
    }

    /// Resolve a bean by name
    pub fn resolve_named(&self, name: &str) -> Result<Arc<dyn Bean>, CoreError> {
        self.definition(name)
            .map(|definition| Arc::clone(&definition.instance))
            .ok_or_else(|| CoreError::bean_not_found(name))
    }

    /// Resolve a bean by name and downcast it to its concrete type
    pub fn resolve_as<T>(&self, name: &str) -> Result<Arc<T>, CoreError>
    where
        T: Any + Send + Sync,
    {
        self.resolve_named(name)?
            .into_any()
            .downcast::<T>()
            .map_err(|_| CoreError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>().to_string(),
            })
    }

    /// Check that every registered descriptor only names declared types
    pub fn validate(&self) -> Result<(), CoreError> {
        for definition in &self.definitions {
            self.hierarchy.validate(&definition.descriptor)?;
        }
        Ok(())
    }
}

impl Default for BeanRegistry {
    fn default() -> Self {
        Self::new()
    }
}
