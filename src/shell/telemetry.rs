use crate::shell::config::AppConfig;
use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global fmt subscriber. Returns false when another subscriber was already
/// installed, which is the normal case for the second caller in a test binary.
pub fn init(config: &AppConfig) -> anyhow::Result<bool> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter `{}`", config.log_filter))?;
    let installed = fmt()
        .with_env_filter(filter)
        .with_target(config.log_target)
        .try_init()
        .is_ok();
    Ok(installed)
}
