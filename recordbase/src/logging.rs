use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact stdout subscriber.
///
/// Respects `RUST_LOG` when set and falls back to `info`. Calling it again
/// after a subscriber is installed is a no-op.
pub fn init_logging() {
    init_logging_with("info");
}

/// Same as [`init_logging`] with a custom fallback filter.
pub fn init_logging_with(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging_with("debug");
    }
}
