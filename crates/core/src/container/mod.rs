#[allow(clippy::module_inception)]
pub mod container;
pub mod bean;
pub mod builder;
pub mod definition;
pub mod injection;
pub mod registry;

pub use bean::Bean;
pub use builder::ContainerBuilder;
pub use container::Container;
pub use definition::BeanDefinition;
pub use injection::InjectionPoint;
pub use registry::BeanRegistry;
