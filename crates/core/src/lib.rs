//! Variance-aware value holders and a bean container that wires
//! collections by generic type.
//!
//! * [`types`] describes declared types and renders them as compact names.
//! * [`boxes`] holds the producer, consumer and invariant value holders.
//! * [`container`] registers beans and matches them against injection points.
//! * [`demo`] is the sample bean set and the holder wired from it.

pub mod boxes;
pub mod config;
pub mod container;
pub mod demo;
pub mod errors;
pub mod types;

// Re-export key types for convenience
pub use boxes::{Box, InBox, OutBox, Readable, StarBox, StarInBox, StarOutBox, TypeLabel, Writable};
pub use config::{AppConfig, AppConfigTrait, BeanManifest, ConfigError, ConfigSource, LogFormat};
pub use container::{Bean, BeanRegistry, Container, ContainerBuilder, InjectionPoint};
pub use demo::{BoxBeansHolder, WiringReport};
pub use errors::CoreError;
pub use types::{resolve_type_name, DescribeType, Projection, TypeDescriptor, TypeHierarchy, Variance};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version
pub fn version() -> &'static str {
    VERSION
}
