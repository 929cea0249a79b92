//! Logging initialization for the CLI.
//!
//! Built on `tracing-subscriber`. Events go to stderr so stdout carries
//! only the trace and verdict.

use clap::ValueEnum;
use std::io;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "FASIM_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    Compact,
}

/// Resolve the filter from an explicit directive, then `FASIM_LOG`, then `warn`.
pub fn filter(directive: Option<&str>) -> Result<EnvFilter, String> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).map_err(|e| e.to_string()),
        None => Ok(EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))),
    }
}

/// Install the global subscriber.
pub fn init(filter: EnvFilter, format: LogFormat) {
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}
