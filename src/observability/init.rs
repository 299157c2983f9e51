//! Tracing subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to the configured level.
///
/// An unparsable configured level falls back to [`DEFAULT_LEVEL`].
#[must_use]
pub fn resolve_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initializes the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by the resolved level (see [`resolve_filter`])
/// 2. Formats them compactly without targets
/// 3. Writes them to stderr
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(fmt_layer);

    if subscriber.try_init().is_ok() {
        tracing::debug!(trace_level = ?config.trace_level, "tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = Config::default();
        init_tracing(&config);
        init_tracing(&config);
    }

    #[test]
    fn bad_level_falls_back() {
        let config = Config {
            trace_level: Some("[[not a filter".to_string()),
            ..Default::default()
        };
        // RUST_LOG may be set in the test environment; either way this must not panic.
        let _filter = resolve_filter(&config);
    }
}
