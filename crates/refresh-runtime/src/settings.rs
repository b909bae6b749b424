//! # Shared Settings
//!
//! Process-wide key/value snapshot of prefixed environment variables, and
//! the canonical refresh-aware component: its endpoint re-reads the
//! environment whenever the refresh signal arrives.

use std::collections::HashMap;
use std::env;

use parking_lot::RwLock;
use tracing::debug;

use refresh_broadcast::{TransactionCode, REFRESH_CODE};

use crate::adapters::{ControlEndpoint, ControlRejection};

/// Name the settings endpoint registers under on the hub.
pub const SETTINGS_SERVICE: &str = "shared-settings";

/// Snapshot of environment variables carrying a fixed prefix.
///
/// Readers see a consistent snapshot; the whole snapshot is swapped when
/// [`reload`](SharedSettings::reload) runs.
pub struct SharedSettings {
    prefix: String,
    values: RwLock<HashMap<String, String>>,
}

impl SharedSettings {
    /// Capture an initial snapshot of variables starting with `prefix`.
    pub fn load(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let values = RwLock::new(Self::snapshot(&prefix));
        Self { prefix, values }
    }

    fn snapshot(prefix: &str) -> HashMap<String, String> {
        env::vars().filter(|(key, _)| key.starts_with(prefix)).collect()
    }

    /// Value for `key` in the current snapshot.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    /// Number of keys in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the current snapshot holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Re-read the environment and swap the snapshot wholesale.
    pub fn reload(&self) {
        let fresh = Self::snapshot(&self.prefix);
        let keys = fresh.len();
        *self.values.write() = fresh;
        debug!(keys, "settings snapshot reloaded");
    }
}

impl ControlEndpoint for SharedSettings {
    fn handle_control(
        &self,
        code: TransactionCode,
        _payload: &[u8],
    ) -> Result<(), ControlRejection> {
        if code != REFRESH_CODE {
            return Err(ControlRejection::UnsupportedCode);
        }
        self.reload();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_captures_only_prefixed_vars() {
        env::set_var("SETTINGS_TEST_A_KEY", "one");
        env::set_var("UNRELATED_TEST_A_KEY", "two");

        let settings = SharedSettings::load("SETTINGS_TEST_A_");
        assert_eq!(settings.get("SETTINGS_TEST_A_KEY"), Some("one".to_string()));
        assert_eq!(settings.get("UNRELATED_TEST_A_KEY"), None);
    }

    #[test]
    fn test_refresh_code_triggers_reload() {
        env::set_var("SETTINGS_TEST_B_KEY", "before");
        let settings = SharedSettings::load("SETTINGS_TEST_B_");
        assert_eq!(
            settings.get("SETTINGS_TEST_B_KEY"),
            Some("before".to_string())
        );

        env::set_var("SETTINGS_TEST_B_KEY", "after");
        settings
            .handle_control(REFRESH_CODE, &[])
            .expect("refresh code must be accepted");
        assert_eq!(
            settings.get("SETTINGS_TEST_B_KEY"),
            Some("after".to_string())
        );
    }

    #[test]
    fn test_other_codes_are_rejected_without_reload() {
        env::set_var("SETTINGS_TEST_C_KEY", "before");
        let settings = SharedSettings::load("SETTINGS_TEST_C_");

        env::set_var("SETTINGS_TEST_C_KEY", "after");
        let result = settings.handle_control(TransactionCode::pack(*b"PING"), &[]);

        assert_eq!(result, Err(ControlRejection::UnsupportedCode));
        // Snapshot untouched by the rejected code.
        assert_eq!(
            settings.get("SETTINGS_TEST_C_KEY"),
            Some("before".to_string())
        );
    }
}
