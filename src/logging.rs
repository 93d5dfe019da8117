//! Diagnostics via `tracing` and `tracing-subscriber`.
//!
//! User-facing warnings are written by the menu options themselves; tracing
//! events are for the operator and go to stderr.
//!
//! # Log Levels
//!
//! - `error`: unreadable files, loads without any valid course
//! - `warn`: skipped lines and dropped prerequisites
//! - `info`: load start and summary counts
//! - `debug`: menu dispatch, duplicate course numbers

use std::io;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (error, warn, info, debug, trace).
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::ERROR,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// `--verbose` raises the level to debug.
    #[must_use]
    pub fn from_verbose(verbose: bool) -> Self {
        let level = if verbose { Level::DEBUG } else { Level::ERROR };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber, writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    init_logging_with_writer(config, io::stderr)
}

/// Install the global subscriber with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .without_time()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()?;
    Ok(())
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("{level},course_planner={level}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer {
        buf: Arc<Mutex<Vec<u8>>>,
    }

    struct SharedBufferGuard {
        buf: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for SharedBufferGuard {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBufferGuard;

        fn make_writer(&'a self) -> Self::Writer {
            SharedBufferGuard {
                buf: Arc::clone(&self.buf),
            }
        }
    }

    // The only test in this crate that installs a global subscriber.
    #[test]
    fn test_loader_warnings_reach_the_writer() {
        let buffer = SharedBuffer::default();
        let config = LogConfig::default()
            .with_level(Level::WARN)
            .with_target(true)
            .with_ansi(false);
        init_logging_with_writer(&config, buffer.clone()).unwrap();

        crate::loader::parse("LONELY\nCS101,Intro,CS999\n");

        let logged = String::from_utf8(buffer.buf.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("skipping line with insufficient data"), "got: {logged}");
        assert!(logged.contains("dropping unresolved prerequisite"), "got: {logged}");
        assert!(logged.contains("course_planner::loader"), "got: {logged}");
        assert!(init_logging_with_writer(&config, buffer).is_err());
    }

    #[test]
    fn test_from_verbose() {
        assert_eq!(LogConfig::from_verbose(false).level, Level::ERROR);
        assert_eq!(LogConfig::from_verbose(true).level, Level::DEBUG);
    }

    #[test]
    fn test_builder_flags() {
        let config = LogConfig::default().with_target(true).with_ansi(false);
        assert!(config.with_target);
        assert!(!config.with_ansi);
    }
}
