//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when it parses; otherwise the configured level is used.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install JSON logger: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    }

    Ok(())
}
