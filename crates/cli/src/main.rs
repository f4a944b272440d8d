mod commands;
mod logging;

use clap::{Parser, Subcommand};
use commands::*;
use covary_core::config::{AppConfig, ConfigOverrides, LogFormat};
use covary_core::CoreError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "covary")]
#[command(about = "Render generic type signatures and inspect variance-aware collection wiring")]
struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format (pretty or json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the compact name of one or more type signatures
    Resolve {
        /// Signatures such as `Box<out Number>` or `List<OutBox<*>>`
        #[arg(required = true)]
        signatures: Vec<String>,
    },

    /// List registered beans with their declared types
    Beans {
        /// YAML bean manifest to register instead of the demo beans
        #[arg(long)]
        beans: Option<PathBuf>,
    },

    /// Wire the demo holder and report the beans injected into each field
    Wire {
        /// YAML bean manifest to register instead of the demo beans
        #[arg(long)]
        beans: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Environment configuration with command line flags applied on top
    fn app_config(&self) -> Result<AppConfig, CoreError> {
        let beans_file = match &self.command {
            Commands::Beans { beans } | Commands::Wire { beans, .. } => beans.clone(),
            Commands::Resolve { .. } => None,
        };

        let overrides = ConfigOverrides {
            log_level: self.log_level.clone(),
            log_format: self.log_format,
            beans_file,
            skip_beans_file: matches!(self.command, Commands::Resolve { .. }),
        };

        Ok(AppConfig::from_env_with(&overrides)?)
    }
}

fn main() -> Result<(), CoreError> {
    let cli = Cli::parse();
    let config = cli.app_config()?;
    logging::init(&config)?;

    match cli.command {
        Commands::Resolve { signatures } => {
            resolve::run(&signatures)?;
        }
        Commands::Beans { .. } => {
            beans::run(&config)?;
        }
        Commands::Wire { json, .. } => {
            wire::run(&config, json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from(["covary", "resolve", "Box<Int>", "OutBox<*>"]).unwrap();
        match cli.command {
            Commands::Resolve { signatures } => assert_eq!(signatures, vec!["Box<Int>", "OutBox<*>"]),
            _ => panic!("expected resolve"),
        }

        assert!(Cli::try_parse_from(["covary", "resolve"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["covary", "wire", "--json", "--log-format", "json", "--log-level", "debug"]).unwrap();

        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Wire { json: true, beans: None }));

        assert!(Cli::try_parse_from(["covary", "beans", "--log-format", "xml"]).is_err());
    }

    #[test]
    #[serial]
    fn test_flags_override_environment() {
        std::env::remove_var("COVARY_BEANS_FILE");
        std::env::set_var("COVARY_LOG_LEVEL", "warn");

        let cli = Cli::try_parse_from(["covary", "--log-level", "TRACE", "beans", "--beans", "Cargo.toml"]).unwrap();
        let config = cli.app_config();
        std::env::remove_var("COVARY_LOG_LEVEL");

        let config = config.unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.beans_file, Some(PathBuf::from("Cargo.toml")));
    }

    #[test]
    #[serial]
    fn test_flags_replace_invalid_environment() {
        std::env::set_var("COVARY_LOG_LEVEL", "loud");
        std::env::set_var("COVARY_BEANS_FILE", "gone.yaml");

        let resolve = Cli::try_parse_from(["covary", "--log-level", "debug", "resolve", "Box<Int>"])
            .unwrap()
            .app_config();
        let wire = Cli::try_parse_from(["covary", "--log-level", "debug", "wire", "--beans", "Cargo.toml"])
            .unwrap()
            .app_config();
        let unflagged = Cli::try_parse_from(["covary", "beans"]).unwrap().app_config();
        std::env::remove_var("COVARY_LOG_LEVEL");
        std::env::remove_var("COVARY_BEANS_FILE");

        let resolve = resolve.unwrap();
        assert_eq!(resolve.log_level, "debug");
        assert!(resolve.beans_file.is_none());

        let wire = wire.unwrap();
        assert_eq!(wire.beans_file, Some(PathBuf::from("Cargo.toml")));

        assert!(matches!(unflagged, Err(CoreError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_flag_values() {
        std::env::remove_var("COVARY_LOG_LEVEL");
        std::env::remove_var("COVARY_BEANS_FILE");

        let cli = Cli::try_parse_from(["covary", "--log-level", "loud", "resolve", "Box"]).unwrap();
        assert!(matches!(cli.app_config(), Err(CoreError::Config(_))));

        let cli = Cli::try_parse_from(["covary", "wire", "--beans", "missing.yaml"]).unwrap();
        assert!(cli.app_config().is_err());
    }
}
