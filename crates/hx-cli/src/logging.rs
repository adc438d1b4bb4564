//! Diagnostic logging to stderr via `tracing-subscriber`.
//!
//! Stdout carries command output only. `RUST_LOG` overrides the level
//! chosen with `-v`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for the hexivium crates.
    pub level: Level,
    /// Whether to use ANSI colors.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level: none is warn, then info, debug, trace.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,hexivium={level},hx_core={level},hx_oracle={level},hx_session={level}"
        ))
    })
}
