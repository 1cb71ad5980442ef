use flexi_logger::{LogSpecBuilder, LogSpecification};
use log::warn;

mod views;

pub mod app;

pub use app::{App, Message};

/// Parses a log level string, falling back to `warn` when it is malformed.
pub fn get_log_spec(log_level: &str) -> LogSpecification {
    LogSpecification::env_or_parse(log_level).unwrap_or_else(|err| {
        warn!("Failed to parse log level {log_level:?}: {err}");
        LogSpecBuilder::new().default(log::LevelFilter::Warn).build()
    })
}

