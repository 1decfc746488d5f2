//! Tracing setup
//!
//! The core only emits `debug`/`trace` events carrying lengths and counts.
//! Embedding applications call [`init`] once at startup, or install their
//! own subscriber instead.

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::{KryptError, KryptResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "KRYPT_LOG";

/// Build the filter from `KRYPT_LOG`, falling back to the settings value
pub fn filter_for(settings: &Settings) -> KryptResult<EnvFilter> {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| settings.log_filter.clone());

    EnvFilter::try_new(&directive)
        .map_err(|e| KryptError::Config(format!("Invalid log filter '{}': {}", directive, e)))
}

/// Install a stderr subscriber for the process
///
/// Fails with a config error if a global subscriber is already set.
pub fn init(settings: &Settings) -> KryptResult<()> {
    let filter = filter_for(settings)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| KryptError::Config(format!("Failed to initialize logging: {}", e)))
}
