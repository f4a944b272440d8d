pub mod beans;
pub mod resolve;
pub mod wire;

use covary_core::config::{AppConfig, BeanManifest};
use covary_core::container::{Container, ContainerBuilder};
use covary_core::demo::default_container;
use covary_core::CoreError;

/// Container from the configured manifest, or the demo beans when none is set
pub fn load_container(config: &AppConfig) -> Result<Container, CoreError> {
    match &config.beans_file {
        Some(path) => {
            let manifest = BeanManifest::from_file(path)?;
            ContainerBuilder::new().add_manifest(&manifest)?.build()
        }
        None => default_container(),
    }
}
