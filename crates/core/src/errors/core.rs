use crate::config::ConfigError;
use thiserror::Error;

/// Core error type for the covary container, parser and configuration layers
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid type signature '{input}' at position {position}: {message}")]
    TypeSyntax {
        input: String,
        position: usize,
        message: String,
    },

    #[error("Unknown type: {type_name}")]
    UnknownType { type_name: String },

    #[error("Bean already registered: {name}")]
    DuplicateBean { name: String },

    #[error("Bean not found: {name}")]
    BeanNotFound { name: String },

    #[error("Bean '{name}' is not a {expected}")]
    TypeMismatch { name: String, expected: String },

    #[error("Invalid injection point '{name}': {message}")]
    InvalidInjectionPoint { name: String, message: String },

    #[error("Invalid bean definition '{name}': {message}")]
    InvalidBeanDefinition { name: String, message: String },
}

impl CoreError {
    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new type signature error
    pub fn type_syntax(input: impl Into<String>, position: usize, message: impl Into<String>) -> Self {
        Self::TypeSyntax {
            input: input.into(),
            position,
            message: message.into(),
        }
    }

    /// Create a new unknown type error
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Create a new bean not found error
    pub fn bean_not_found(name: impl Into<String>) -> Self {
        Self::BeanNotFound { name: name.into() }
    }

    /// Create a new invalid injection point error
    pub fn invalid_injection_point(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInjectionPoint {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid bean definition error
    pub fn invalid_bean_definition(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBeanDefinition {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Check if the error came from parsing a type signature
    pub fn is_type_syntax(&self) -> bool {
        matches!(self, Self::TypeSyntax { .. })
    }

    /// Check if the error is a bean lookup failure
    pub fn is_bean_lookup(&self) -> bool {
        matches!(self, Self::BeanNotFound { .. } | Self::TypeMismatch { .. })
    }

    /// Check if the error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Config(_))
    }
}
