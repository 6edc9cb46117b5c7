use crate::config::ConfigError;
use crate::sink::SinkError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, log file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The command line could not be turned into a configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The sink rejected a draft.
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// The global log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}
