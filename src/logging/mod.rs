// Logging module for structured logging using the tracing crate

use std::error::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the event filter. `RUST_LOG` takes precedence over the configured
/// level when it is set and parses.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, Box<dyn Error>> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(&config.level)?)
}

/// Initialize the tracing subscriber for structured logging.
///
/// Events go to stderr. With `json` set, each event is one JSON object per
/// line.
///
/// # Errors
///
/// Returns an error when the level directive does not parse or a global
/// subscriber is already installed.
///
/// # Examples
///
/// ```
/// use logostamp::config::LoggingConfig;
/// use logostamp::logging::init_subscriber;
///
/// init_subscriber(&LoggingConfig::default()).expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| e as Box<dyn Error>)
}
