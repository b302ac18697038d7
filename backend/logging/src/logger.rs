//! Structured Logger
//!
//! Wraps `tracing` with a console layer (text or JSON), an optional daily
//! rolling NDJSON file, and `RUST_LOG`-aware level control.

use std::path::PathBuf;

use tracing::Dispatch;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How the global subscriber should be built.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit console output as JSON lines instead of text.
    pub json: bool,
    /// Directory for `clawchat.log.YYYY-MM-DD`; no file output when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            log_dir: None,
        }
    }
}

/// Builds the filter: `RUST_LOG` wins, then the configured level, then `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Console-only dispatcher for work that runs before [`init_logger`], such as
/// loading the config that decides how logging is set up.
pub fn bootstrap_dispatch(level: &str) -> Dispatch {
    Dispatch::new(
        tracing_subscriber::registry()
            .with(env_filter(level))
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false)),
    )
}

/// Initialize the global structured logger.
///
/// Fails only when the log directory cannot be prepared. Safe to call more
/// than once; later calls leave the first subscriber in place.
pub fn init_logger(options: &LoggerOptions) -> Result<(), InitError> {
    let file_layer = match &options.log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("clawchat.log")
                .build(dir)?;
            Some(fmt::layer().json().with_writer(appender).with_ansi(false))
        }
        None => None,
    };

    let (json_layer, text_layer) = if options.json {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        (
            None,
            Some(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_ansi(true),
            ),
        )
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter(&options.level))
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}
