// Runtime configuration for the composition root.
//
// Sources
// - EVENT_CALENDAR_LOG: tracing filter directives, for example `event_calendar=debug`. Defaults to `info`.
// - EVENT_CALENDAR_LOG_TARGET: `true` or `false`, whether log lines include the module target.

use anyhow::Context;

pub const LOG_FILTER_VAR: &str = "EVENT_CALENDAR_LOG";
pub const LOG_TARGET_VAR: &str = "EVENT_CALENDAR_LOG_TARGET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub log_target: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_target: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_target = match lookup(LOG_TARGET_VAR) {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .with_context(|| format!("{LOG_TARGET_VAR} must be true or false, got `{value}`"))?,
            None => defaults.log_target,
        };
        Ok(Self {
            log_filter,
            log_target,
        })
    }
}
