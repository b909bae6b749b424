//! # Core Domain Entities
//!
//! Identifiers for the two things the broadcast loop touches: the name a
//! service is registered under, and the transient handle the registry hands
//! out for one send attempt.

use std::fmt;

/// Opaque service identifier as supplied by the registry.
///
/// Names are unique within a single enumeration snapshot. The broadcast
/// processes them in the order the registry returned them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a service name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The registry-supplied name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ServiceName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Transient token referencing a live IPC endpoint.
///
/// Minted by the registry on resolution and consumed by the transport for
/// exactly one send attempt. Handles are never cached or stored across loop
/// iterations: every broadcast pass re-enumerates and re-resolves from
/// scratch, and a handle that outlives its iteration may go stale at any
/// moment (the transport reports that as a routine transaction failure).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceHandle {
    raw: u64,
}

impl ServiceHandle {
    /// Wraps a raw binding token minted by a registry adapter.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self { raw }
    }

    /// The raw binding token, for the transport adapter that minted it.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name_display_matches_source() {
        let name = ServiceName::new("settings");
        assert_eq!(name.as_str(), "settings");
        assert_eq!(name.to_string(), "settings");
    }

    #[test]
    fn test_service_name_from_conversions() {
        assert_eq!(ServiceName::from("a"), ServiceName::new("a"));
        assert_eq!(ServiceName::from("a".to_string()), ServiceName::new("a"));
    }

    #[test]
    fn test_handle_round_trips_raw_token() {
        let handle = ServiceHandle::from_raw(42);
        assert_eq!(handle.raw(), 42);
    }
}
