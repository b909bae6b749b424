//! # Runtime Configuration
//!
//! Plain configuration structs with sane defaults and environment-variable
//! overrides. No configuration file: the runtime's whole surface is a
//! handful of `REFRESH_*` variables.

use std::env;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Broadcast trigger behavior.
    pub broadcast: TriggerConfig,
    /// Shared settings source.
    pub settings: SettingsConfig,
}

/// When the runtime triggers broadcast passes.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Trigger one broadcast as soon as the runtime is wired up.
    pub broadcast_on_startup: bool,
    /// Exit after the startup broadcast instead of waiting for signals.
    pub oneshot: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            broadcast_on_startup: true,
            oneshot: false,
        }
    }
}

/// Where the shared settings snapshot comes from.
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    /// Environment prefix captured into the shared snapshot.
    pub env_prefix: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            env_prefix: "REFRESH_SETTING_".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration with environment overrides.
    ///
    /// - `REFRESH_ONESHOT` - `1`/`true` to exit after the startup broadcast
    /// - `REFRESH_BROADCAST_ON_STARTUP` - `0`/`false` to suppress it
    /// - `REFRESH_SETTINGS_PREFIX` - prefix for the settings snapshot
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("REFRESH_ONESHOT") {
            config.broadcast.oneshot = is_truthy(&val);
        }
        if let Ok(val) = env::var("REFRESH_BROADCAST_ON_STARTUP") {
            config.broadcast.broadcast_on_startup = is_truthy(&val);
        }
        if let Ok(prefix) = env::var("REFRESH_SETTINGS_PREFIX") {
            config.settings.env_prefix = prefix;
        }

        config
    }
}

fn is_truthy(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
