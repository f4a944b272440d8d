pub mod app_config;
pub mod manifest;
pub mod sources;
pub mod validation;

pub use app_config::*;
pub use manifest::*;
pub use sources::*;
pub use validation::*;
