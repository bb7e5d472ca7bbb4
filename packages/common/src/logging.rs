//! Logging bootstrap
//!
//! Events are emitted with `tracing`; its `log` feature forwards them to the
//! `log` facade when no subscriber is installed, and `env_logger` prints them.

use log::info;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup backed by `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once at application startup
    ///
    /// Levels come from the `RUST_LOG` environment variable:
    /// - `RUST_LOG=info` - info and above
    /// - `RUST_LOG=brick_error=debug` - module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging with an explicit filter, ignoring `RUST_LOG`
    pub fn init_with_filter(filter: &str) {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::new()
                .parse_filters(filter)
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized with filter {filter}");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are no-ops.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_initialization_is_harmless() {
        LoggingTransformer::init_test();
        LoggingTransformer::init_test();
        tracing::info!("forwarded through the log facade");
    }
}
