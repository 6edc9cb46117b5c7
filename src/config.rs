//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::model::DEFAULT_CONNECT_DELAY;

const DEFAULT_DELAY_MS: u64 = DEFAULT_CONNECT_DELAY.as_millis() as u64;

/// Errors raised while turning command-line flags into a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No `--log-file` was given and the platform has no data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// Expected one of trace, debug, info, warn or error.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Parser)]
#[command(
    name = "station-onboard",
    version,
    about = "Onboard an EV charge station from the terminal"
)]
pub struct Cli {
    /// Delay before the simulated connection check resolves, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    pub connect_delay_ms: u64,

    /// Write logs to this file instead of the data directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub connect_delay: Duration,
    pub log_file: PathBuf,
    pub log_level: Level,
}

impl Config {
    /// Builds the configuration, resolving the default log file under the
    /// platform data directory.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let log_file = match cli.log_file {
            Some(path) => path,
            None => default_log_file()?,
        };
        let log_level = cli
            .log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(cli.log_level.clone()))?;
        Ok(Self {
            connect_delay: Duration::from_millis(cli.connect_delay_ms),
            log_file,
            log_level,
        })
    }
}

fn default_log_file() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join("station-onboard").join("station-onboard.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["station-onboard"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["--log-file", "/tmp/onboard.log"]);
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.connect_delay, Duration::from_millis(4000));
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.log_file, PathBuf::from("/tmp/onboard.log"));
    }

    #[test]
    fn delay_and_level_flags() {
        let cli = parse(&[
            "--connect-delay-ms",
            "250",
            "--log-level",
            "debug",
            "--log-file",
            "x.log",
        ]);
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.connect_delay, Duration::from_millis(250));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let cli = parse(&["--log-level", "loud", "--log-file", "x.log"]);
        let err = Config::from_cli(cli).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref l) if l == "loud"));
    }

    #[test]
    fn non_numeric_delay_fails_to_parse() {
        let result = Cli::try_parse_from(["station-onboard", "--connect-delay-ms", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_log_file_lives_under_app_dir() {
        if let Ok(path) = default_log_file() {
            assert!(path.ends_with("station-onboard/station-onboard.log"));
        }
    }
}
