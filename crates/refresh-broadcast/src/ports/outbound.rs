//! Outbound ports (SPI) for the refresh broadcast subsystem.

use crate::domain::{ServiceHandle, ServiceName, TransactFlags, TransactionCode, TransactionPayload};
use crate::events::BroadcastError;

/// Read-only view of the platform service registry.
///
/// Pure query interface: the broadcast never mutates the registry. The
/// concrete binding is platform-specific; adapters implement this trait over
/// whatever directory the host exposes.
pub trait ServiceRegistry: Send + Sync {
    /// List all currently registered service names, in registration order.
    ///
    /// Queried once per broadcast pass. An empty vector is a valid result.
    ///
    /// # Errors
    ///
    /// `RegistryUnavailable` when the registry cannot be reached or the
    /// query mechanism fails; the caller aborts the whole pass.
    fn list_service_names(&self) -> Result<Vec<ServiceName>, BroadcastError>;

    /// Resolve a name to a live endpoint handle.
    ///
    /// Returns `None` when the name is not currently bound, which is a
    /// normal outcome, not an error. Handles are valid for a single send
    /// attempt and must not be cached.
    fn check_service(&self, name: &ServiceName) -> Option<ServiceHandle>;
}

/// One-way control-transaction transport.
pub trait ControlTransport: Send + Sync {
    /// Issue one control transaction to one handle.
    ///
    /// With `TransactFlags::ONE_WAY` set, no reply is expected and any reply
    /// is discarded. Success means the transport accepted the call.
    ///
    /// # Errors
    ///
    /// Failure is a routine outcome: a live handle does not guarantee the
    /// service implements this transaction. `TransactionRejected` when the
    /// target declines the code, `TransportFailure` when the transport
    /// itself errors (including a handle gone stale since resolution).
    fn transact(
        &self,
        handle: &ServiceHandle,
        code: TransactionCode,
        payload: &TransactionPayload,
        flags: TransactFlags,
    ) -> Result<(), BroadcastError>;
}
