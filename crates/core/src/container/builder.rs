use crate::boxes::{Box, InBox, OutBox, TypeLabel};
use crate::config::{BeanManifest, BeanSpec, ElementKind, HolderKind};
use crate::container::{Bean, BeanRegistry, Container};
use crate::errors::CoreError;
use crate::types::{CharSequence, DescribeType, Number, TypeHierarchy};
use std::fmt::Display;

/// Builder for constructing containers with beans
pub struct ContainerBuilder {
    registry: BeanRegistry,
}

impl ContainerBuilder {
    /// Create a new container builder over the standard type hierarchy
    pub fn new() -> Self {
        Self {
            registry: BeanRegistry::new(),
        }
    }

    /// Replace the type hierarchy; beans added so far are kept
    pub fn with_hierarchy(mut self, hierarchy: TypeHierarchy) -> Self {
        *self.registry.hierarchy_mut() = hierarchy;
        self
    }

    /// Add a bean to the container
    pub fn add_bean<B>(mut self, name: impl Into<String>, bean: B) -> Result<Self, CoreError>
    where
        B: Bean + TypeLabel + DescribeType,
    {
        self.registry.register(name, bean)?;
        Ok(self)
    }

    /// Add every bean declared in a manifest, in manifest order
    pub fn add_manifest(mut self, manifest: &BeanManifest) -> Result<Self, CoreError> {
        manifest.validate()?;
        for spec in &manifest.beans {
            self.add_spec(spec)?;
        }
        tracing::debug!("Registered {} beans from manifest", manifest.len());
        Ok(self)
    }

    /// Configure the builder from a configuration closure
    pub fn configure<F>(self, configure: F) -> Result<Self, CoreError>
    where
        F: FnOnce(Self) -> Result<Self, CoreError>,
    {
        configure(self)
    }

    /// Build the container
    pub fn build(self) -> Result<Container, CoreError> {
        self.registry.validate()?;
        Ok(Container::from_registry(self.registry))
    }

    fn add_spec(&mut self, spec: &BeanSpec) -> Result<(), CoreError> {
        match spec.element_kind()? {
            ElementKind::Int => self.add_holder(spec, spec.parse_value::<i32>()?),
            ElementKind::Long => self.add_holder(spec, spec.parse_value::<i64>()?),
            ElementKind::Double => self.add_holder(spec, spec.parse_value::<f64>()?),
            ElementKind::Number => self.add_holder(spec, spec.parse_value::<Number>()?),
            ElementKind::String => self.add_holder(spec, spec.parse_value::<String>()?),
            ElementKind::CharSequence => self.add_holder(spec, spec.parse_value::<CharSequence>()?),
        }
    }

    fn add_holder<T>(&mut self, spec: &BeanSpec, value: T) -> Result<(), CoreError>
    where
        T: DescribeType + Display + Send + Sync + 'static,
    {
        let name = spec.name.clone();
        match spec.holder {
            HolderKind::Out => self.registry.register(name, OutBox::new(value)),
            HolderKind::In => self.registry.register(name, InBox::new(value)),
            HolderKind::Box => self.registry.register(name, Box::new(value)),
        }
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDescriptor;

    #[test]
    fn test_build_with_beans() {
        let container = ContainerBuilder::new()
            .add_bean("intOutBox", OutBox::new(10_i32))
            .unwrap()
            .add_bean("numberInBox", InBox::new(Number::Double(2.5)))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(container.bean_count(), 2);
        assert_eq!(container.resolve_named("numberInBox").unwrap().to_string(), "InBox<Number>[2.5]");
    }

    #[test]
    fn test_manifest_beans() {
        let manifest = BeanManifest::from_yaml_str(
            r#"
beans:
  - {name: longOutBox, holder: out, element: Long, value: 8589934592}
  - {name: textInBox, holder: in, element: CharSequence, value: text}
  - {name: doubleBox, holder: box, element: f64, value: "0.5"}
"#,
        )
        .unwrap();

        let container = ContainerBuilder::new().add_manifest(&manifest).unwrap().build().unwrap();

        let rendered: Vec<String> = container
            .registry()
            .definitions()
            .iter()
            .map(|definition| definition.instance.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["OutBox<i64>[8589934592]", "InBox<CharSequence>[text]", "Box<f64>[0.5]"]
        );

        let number_producers = container.candidates(&TypeDescriptor::parse("OutBox<Number>").unwrap());
        assert_eq!(number_producers.len(), 1);
    }

    #[test]
    fn test_manifest_errors() {
        let unknown = BeanManifest::from_yaml_str("beans:\n  - {name: a, holder: out, element: Widget, value: 1}").unwrap();
        assert!(matches!(
            ContainerBuilder::new().add_manifest(&unknown),
            Err(CoreError::UnknownType { .. })
        ));

        let unparsable = BeanManifest::from_yaml_str("beans:\n  - {name: a, holder: box, element: Int, value: 1.5}").unwrap();
        assert!(matches!(
            ContainerBuilder::new().add_manifest(&unparsable),
            Err(CoreError::InvalidBeanDefinition { .. })
        ));
    }

    #[test]
    fn test_duplicate_bean_across_sources() {
        let manifest = BeanManifest::from_yaml_str("beans:\n  - {name: intOutBox, holder: out, element: Int, value: 1}").unwrap();
        let result = ContainerBuilder::new()
            .add_bean("intOutBox", OutBox::new(10_i32))
            .and_then(|builder| builder.add_manifest(&manifest));

        assert!(matches!(result, Err(CoreError::DuplicateBean { .. })));
    }

    #[test]
    fn test_build_validates_hierarchy() {
        let mut hierarchy = TypeHierarchy::new();
        hierarchy.declare_generic("OutBox", &[], &[crate::types::Variance::Covariant]);

        let result = ContainerBuilder::new()
            .with_hierarchy(hierarchy)
            .add_bean("intOutBox", OutBox::new(10_i32))
            .and_then(ContainerBuilder::build);

        assert!(matches!(result, Err(CoreError::UnknownType { ref type_name }) if type_name == "i32"));
    }

    #[test]
    fn test_configure_closure() {
        let container = ContainerBuilder::new()
            .configure(|builder| builder.add_bean("stringBox", Box::new("box".to_string())))
            .and_then(ContainerBuilder::build)
            .unwrap();

        assert_eq!(container.resolve_named("stringBox").unwrap().to_string(), "Box<String>[box]");
    }
}
