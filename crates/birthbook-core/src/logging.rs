//! Tracing bootstrap shared by binaries and test harnesses.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// ## Summary
/// Installs a global `tracing` subscriber filtered at the configured level.
///
/// An unparseable level falls back to `info`. Calling this more than once is a
/// no-op: the first subscriber stays installed.
pub fn init_tracing(config: &LoggingConfig) {
    let (filter, rejected) = match EnvFilter::try_new(config.level.as_str()) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init();

    match installed {
        Ok(()) => tracing::debug!(level = %config.level, "Tracing initialised"),
        Err(e) => tracing::trace!(error = %e, "Tracing subscriber already installed"),
    }

    if let Some(e) = rejected {
        tracing::warn!(
            level = %config.level,
            error = %e,
            "Invalid log level in config, using info"
        );
    }
}
