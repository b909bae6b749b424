//! Inbound ports (API) for the refresh broadcast subsystem.

/// Primary API for triggering a refresh broadcast.
///
/// The contract is deliberately minimal: no arguments, no return value, no
/// completion signal. Callers trigger and move on; the outcome of a pass is
/// observable only through logs and metrics.
pub trait RefreshBroadcaster: Send + Sync {
    /// Fire-and-forget: start a broadcast pass and return immediately.
    ///
    /// Each call runs an independent pass over a freshly enumerated
    /// registry snapshot. Concurrent calls are not coordinated; overlapping
    /// sends to the same service are tolerated because the refresh signal
    /// is idempotent from the sender's point of view.
    fn broadcast(&self);
}
