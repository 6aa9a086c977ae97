//! Opt-in error reporting on the `log` facade
//!
//! The propagation functions never log on their own. Terminal consumers that want
//! a report call into [`LoggingTransformer`] once the error reaches them.

use super::traits::Failure;
use super::traverse;
use log::{debug, error, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Reporting helpers built on `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Install `env_logger` as the reporter's backend
    ///
    /// Repeated calls are ignored, and so is a logger the application already
    /// installed. Levels follow `RUST_LOG`:
    /// `error` shows the detailed reports, `debug` adds cause chains.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            let installed = env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init();
            if installed.is_ok() {
                info!("errnote reporting enabled");
            }
        });
    }

    /// Install a capture-friendly backend for `cargo test`
    ///
    /// Reports go through the test harness's output capture, so they only show
    /// for failing tests. Every test may call this; only the first call in a
    /// test binary installs the logger.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log the detailed rendering of an error, one record per trace line
    pub fn log_details(err: &dyn Failure) {
        for line in traverse::details(Some(err)).lines() {
            error!("{line}");
        }
    }

    /// Log every link of the structured cause chain with its concrete type
    pub fn log_chain(err: &dyn Failure) {
        for (depth, link) in traverse::chain(err).enumerate() {
            debug!(
                "cause #{depth}: {link} (error_type: {})",
                link.concrete_type_name()
            );
        }
    }

    /// Log that an error is about to be masked, naming only its type
    ///
    /// The message is left out so masked internals do not leak into logs either.
    pub fn log_masked(operation: &str, err: &dyn Failure) {
        warn!(
            "Masking error during {operation} (error_type: {})",
            err.concrete_type_name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new, wrap, Message};

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        let root = new("config missing");
        let wrapped = wrap(Some(root), "read failed");
        if let Some(wrapped) = wrapped {
            LoggingTransformer::log_details(&wrapped);
            LoggingTransformer::log_chain(&wrapped);
        }
        LoggingTransformer::log_masked("startup", &Message::new("secret path"));
    }

    #[test]
    fn init_keeps_an_installed_logger() {
        LoggingTransformer::init_test();
        LoggingTransformer::init();
        LoggingTransformer::init();
        LoggingTransformer::log_details(&new("still reported"));
    }
}
