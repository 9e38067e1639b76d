// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. explicit level from the embedding application (if provided)
//! 2. `TASKWAVE_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`

use tracing_subscriber::fmt;

/// Initialise the global logging subscriber.
///
/// For embedding applications that have no subscriber of their own. Safe to
/// call once at startup; calling it twice panics, as with any global
/// subscriber installation.
pub fn init_logging(level: Option<tracing::Level>) {
    let level = level
        .or_else(|| {
            std::env::var("TASKWAVE_LOG")
                .ok()
                .and_then(|s| parse_level_str(&s))
        })
        .unwrap_or(tracing::Level::INFO);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
