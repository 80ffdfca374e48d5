// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Install tracing.
// - Hand back a calendar wired to the in memory change log.

pub mod config;
pub mod telemetry;

use crate::application::calendar::Calendar;
use crate::shell::config::AppConfig;
use tracing::debug;

pub fn bootstrap(config: &AppConfig) -> anyhow::Result<Calendar> {
    if !telemetry::init(config)? {
        debug!("tracing subscriber already installed, keeping it");
    }
    Ok(Calendar::in_memory())
}
