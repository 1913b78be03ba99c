//! Tracing setup for the demo binary.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LogFormat;
use crate::error::Error;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once for the process.
///
/// Filter defaults to `info` unless `RUST_LOG` is set. Logs go to stderr so
/// stdout carries only the demo transcript. Only the first call attempts the
/// install and can fail; later calls return `Ok(())`.
pub fn init_tracing(format: LogFormat) -> Result<(), Error> {
    let mut result = Ok(());
    TRACING_INIT.get_or_init(|| {
        result = install(format);
    });
    result
}

fn install(format: LogFormat) -> Result<(), Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}
