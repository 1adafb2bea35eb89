//! Logging setup for binaries and tests embedding the phone number set.

use tracing::Level;
use tracing_subscriber::{
    fmt::time::ChronoUtc, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DEFAULT_LOG_TARGET: &str = "phone_set";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub json_format: bool,
    pub colorize: bool,
    pub log_targets: Option<Vec<String>>,
}

impl Default for LoggingConfig {
    #[inline]
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            colorize: true,
            log_targets: Some(vec![DEFAULT_LOG_TARGET.to_string()]),
        }
    }
}

#[inline]
const fn level_to_str(level: Level) -> &'static str {
    match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

fn build_filter_string(targets: &[String], level_filter: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target, level_filter))
        .collect::<Vec<_>>()
        .join(",")
}

fn filter_string(config: &LoggingConfig) -> String {
    let level_filter = level_to_str(config.level);
    match &config.log_targets {
        Some(targets) if !targets.is_empty() => build_filter_string(targets, level_filter),
        _ => format!("{}={}", DEFAULT_LOG_TARGET, level_filter),
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `config`.
///
/// Events go to stderr so stdout stays free for command output. Calling this
/// twice is harmless; the second subscriber is ignored.
pub fn init_logging(config: LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_string(&config)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.colorize)
        .with_file(true)
        .with_line_number(true)
        .with_timer(ChronoUtc::new(TIME_FORMAT.to_string()));

    let layer = if config.json_format {
        layer.json().flatten_event(true).boxed()
    } else {
        layer.boxed()
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init();
}
