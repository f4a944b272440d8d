use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Environment variable error: {message}")]
    EnvironmentError { message: String },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create an environment error
    pub fn environment_error(message: impl Into<String>) -> Self {
        Self::EnvironmentError {
            message: message.into(),
        }
    }
}

/// Trait for validating configuration values
pub trait ConfigValidator<T: ?Sized> {
    /// Validate a configuration value
    fn validate(&self, value: &T) -> Result<(), ConfigError>;
}

/// Accepts one of a fixed set of case-insensitive names
pub struct OneOfValidator {
    pub field: &'static str,
    pub allowed: &'static [&'static str],
}

impl ConfigValidator<str> for OneOfValidator {
    fn validate(&self, value: &str) -> Result<(), ConfigError> {
        let lowered = value.to_lowercase();
        if self.allowed.contains(&lowered.as_str()) {
            return Ok(());
        }
        Err(ConfigError::invalid_value(
            self.field,
            value,
            format!("one of: {}", self.allowed.join(", ")),
        ))
    }
}

/// Requires a path to name an existing regular file
pub struct ExistingFileValidator {
    pub field: &'static str,
}

impl ConfigValidator<std::path::Path> for ExistingFileValidator {
    fn validate(&self, value: &std::path::Path) -> Result<(), ConfigError> {
        if value.is_file() {
            return Ok(());
        }
        Err(ConfigError::invalid_value(
            self.field,
            value.display().to_string(),
            "path to an existing file",
        ))
    }
}
