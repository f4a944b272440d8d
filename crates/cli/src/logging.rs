use covary_core::config::AppConfig;
use covary_core::CoreError;
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so command
/// output on stdout stays machine readable.
pub fn init(config: &AppConfig) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| CoreError::configuration(format!("invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.log_format.is_json() {
        registry.with(Layer::new().with_writer(io::stderr).json()).try_init()
    } else {
        registry.with(Layer::new().with_writer(io::stderr)).try_init()
    };

    result.map_err(|e| CoreError::configuration(format!("failed to install logger: {}", e)))?;
    tracing::debug!("Logging initialized at {} ({})", config.log_level, config.log_format);
    Ok(())
}
