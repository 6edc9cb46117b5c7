//! File logging. The terminal belongs to the TUI, so events never go to stdout.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::Config;

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Builds the filter from `RUST_LOG`, falling back to the configured level
/// when the variable is unset or empty.
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level).into())
        .from_env_lossy()
}

/// Installs the global subscriber writing plain lines to the log file.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_logging(config: &Config) -> Result<(), crate::tui::AppError> {
    let file = open_log_file(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| crate::tui::AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use tempfile::tempdir;
    use tracing::Level;

    use super::*;

    #[test]
    fn open_log_file_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("app.log");
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "hello").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        writeln!(open_log_file(&path).unwrap(), "one").unwrap();
        writeln!(open_log_file(&path).unwrap(), "two").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn filter_uses_configured_level() {
        let config = Config {
            connect_delay: Duration::from_millis(1),
            log_file: "unused.log".into(),
            log_level: Level::DEBUG,
        };
        let filter = build_filter(&config);
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        }
    }
}
