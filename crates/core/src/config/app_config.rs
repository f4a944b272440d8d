use crate::config::{ConfigError, ConfigSource, ConfigValidator, ExistingFileValidator, OneOfValidator};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const LOG_LEVEL_ENV: &str = "COVARY_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "COVARY_LOG_FORMAT";
pub const BEANS_FILE_ENV: &str = "COVARY_BEANS_FILE";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration trait for application configuration
pub trait AppConfigTrait: Sized {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self, ConfigError>;

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError>;

    /// Get configuration source information for debugging
    fn config_sources(&self) -> HashMap<String, ConfigSource>;
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::invalid_value("log_format", s, "pretty or json")),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let format_str = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        };
        write!(f, "{}", format_str)
    }
}

impl LogFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, LogFormat::Json)
    }
}

/// Settings shared by the command line tool and embedding applications
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    /// Bean manifest to register instead of the built-in demo beans
    pub beans_file: Option<PathBuf>,
    sources: HashMap<String, ConfigSource>,
}

impl AppConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        let mut sources = HashMap::new();
        sources.insert("log_level".to_string(), ConfigSource::Default("info".to_string()));
        sources.insert("log_format".to_string(), ConfigSource::Default("pretty".to_string()));
        sources.insert("beans_file".to_string(), ConfigSource::Default("built-in beans".to_string()));

        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            beans_file: None,
            sources,
        }
    }

    /// Override the log level, e.g. from a command line flag
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self.sources.insert("log_level".to_string(), ConfigSource::Programmatic);
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self.sources.insert("log_format".to_string(), ConfigSource::Programmatic);
        self
    }

    pub fn with_beans_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.beans_file = Some(path.into());
        self.sources.insert("beans_file".to_string(), ConfigSource::Programmatic);
        self
    }

    /// Check if a bean manifest is configured
    pub fn has_beans_file(&self) -> bool {
        self.beans_file.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Values that take precedence over the environment, e.g. command line flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub beans_file: Option<PathBuf>,
    /// Ignore `COVARY_BEANS_FILE` for runs that never load beans
    pub skip_beans_file: bool,
}

impl AppConfig {
    /// Load from the environment with overrides applied first.
    ///
    /// An overridden field never reads its variable, so a bad environment
    /// value only fails when nothing replaces it. Validation runs once at the end.
    pub fn from_env_with(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        match &overrides.log_level {
            Some(level) => config = config.with_log_level(level.to_lowercase()),
            None => {
                if let Ok(log_level) = env::var(LOG_LEVEL_ENV) {
                    config.log_level = log_level.to_lowercase();
                    config
                        .sources
                        .insert("log_level".to_string(), ConfigSource::EnvVar(LOG_LEVEL_ENV.to_string()));
                }
            }
        }

        match overrides.log_format {
            Some(format) => config = config.with_log_format(format),
            None => {
                if let Ok(format_str) = env::var(LOG_FORMAT_ENV) {
                    config.log_format = format_str.parse()?;
                    config
                        .sources
                        .insert("log_format".to_string(), ConfigSource::EnvVar(LOG_FORMAT_ENV.to_string()));
                }
            }
        }

        if let Some(path) = &overrides.beans_file {
            config = config.with_beans_file(path);
        } else if !overrides.skip_beans_file {
            match env::var(BEANS_FILE_ENV) {
                Ok(path) if path.trim().is_empty() => {
                    return Err(ConfigError::environment_error(format!("{} is set but empty", BEANS_FILE_ENV)));
                }
                Ok(path) => {
                    config.beans_file = Some(PathBuf::from(path));
                    config
                        .sources
                        .insert("beans_file".to_string(), ConfigSource::EnvVar(BEANS_FILE_ENV.to_string()));
                }
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(ConfigError::environment_error(format!("{} is not valid unicode", BEANS_FILE_ENV)));
                }
                Err(env::VarError::NotPresent) => {}
            }
        }

        config.validate()?;
        Ok(config)
    }
}

impl AppConfigTrait for AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        OneOfValidator {
            field: "log_level",
            allowed: LOG_LEVELS,
        }
        .validate(self.log_level.as_str())?;

        if let Some(path) = &self.beans_file {
            ExistingFileValidator { field: "beans_file" }.validate(path.as_path())?;
        }

        Ok(())
    }

    fn config_sources(&self) -> HashMap<String, ConfigSource> {
        self.sources.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(LOG_LEVEL_ENV);
        env::remove_var(LOG_FORMAT_ENV);
        env::remove_var(BEANS_FILE_ENV);
    }

    #[test]
    #[serial]
    fn test_defaults_without_environment() {
        clear_env();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.has_beans_file());

        let sources = config.config_sources();
        assert!(sources["log_level"].is_default());
        assert!(sources["beans_file"].is_default());
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        clear_env();
        env::set_var(LOG_LEVEL_ENV, "DEBUG");
        env::set_var(LOG_FORMAT_ENV, "json");
        env::set_var(BEANS_FILE_ENV, "Cargo.toml");

        let config = AppConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.log_level, "debug");
        assert!(config.log_format.is_json());
        assert_eq!(config.beans_file, Some(PathBuf::from("Cargo.toml")));

        let sources = config.config_sources();
        assert_eq!(sources["log_level"], ConfigSource::EnvVar(LOG_LEVEL_ENV.to_string()));
        assert!(sources["log_format"].is_env_var());
        assert!(sources["beans_file"].is_env_var());
    }

    #[test]
    #[serial]
    fn test_invalid_environment_values() {
        clear_env();

        env::set_var(LOG_LEVEL_ENV, "loud");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "log_level"
        ));
        clear_env();

        env::set_var(LOG_FORMAT_ENV, "xml");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "log_format"
        ));
        clear_env();

        env::set_var(BEANS_FILE_ENV, "does-not-exist.yaml");
        assert!(AppConfig::from_env().is_err());
        clear_env();

        env::set_var(BEANS_FILE_ENV, " ");
        assert!(matches!(AppConfig::from_env(), Err(ConfigError::EnvironmentError { .. })));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_replace_invalid_environment() {
        clear_env();
        env::set_var(LOG_LEVEL_ENV, "loud");
        env::set_var(LOG_FORMAT_ENV, "xml");
        env::set_var(BEANS_FILE_ENV, "gone.yaml");

        let overrides = ConfigOverrides {
            log_level: Some("DEBUG".to_string()),
            log_format: Some(LogFormat::Json),
            beans_file: Some(PathBuf::from("Cargo.toml")),
            skip_beans_file: false,
        };
        let config = AppConfig::from_env_with(&overrides);
        let without_beans = AppConfig::from_env_with(&ConfigOverrides {
            beans_file: None,
            skip_beans_file: true,
            ..overrides.clone()
        });
        let untouched = AppConfig::from_env();
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.log_format.is_json());
        assert_eq!(config.beans_file, Some(PathBuf::from("Cargo.toml")));
        assert_eq!(config.config_sources()["log_level"], ConfigSource::Programmatic);
        assert_eq!(config.config_sources()["beans_file"], ConfigSource::Programmatic);

        let without_beans = without_beans.unwrap();
        assert!(!without_beans.has_beans_file());
        assert!(without_beans.config_sources()["beans_file"].is_default());

        assert!(untouched.is_err());
    }

    #[test]
    #[serial]
    fn test_overrides_are_still_validated() {
        clear_env();

        let overrides = ConfigOverrides {
            log_level: Some("loud".to_string()),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            AppConfig::from_env_with(&overrides),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "log_level"
        ));

        let overrides = ConfigOverrides {
            beans_file: Some(PathBuf::from("gone.yaml")),
            ..ConfigOverrides::default()
        };
        assert!(AppConfig::from_env_with(&overrides).is_err());
    }

    #[test]
    fn test_programmatic_overrides() {
        let config = AppConfig::new().with_log_level("trace").with_log_format(LogFormat::Json);

        assert!(config.validate().is_ok());
        assert_eq!(config.config_sources()["log_level"], ConfigSource::Programmatic);
        assert_eq!(config.log_format.to_string(), "json");
    }
}
