//! # Refresh Broadcast Service
//!
//! The orchestrator for one broadcast pass: enumerate every registered
//! service name, resolve each to a live handle, send the fixed refresh
//! transaction, and contain every per-service failure.
//!
//! ## Architecture
//!
//! Implements the synchronous pass behind the [`RefreshBroadcaster`]
//! inbound port (the fire-and-forget wrapper lives in
//! [`crate::scheduler`]). It depends on two outbound ports, implemented by
//! adapters in the runtime crate:
//!
//! - [`ServiceRegistry`]: name enumeration and live-handle resolution
//! - [`ControlTransport`]: one-way control-transaction delivery
//!
//! ## Failure Containment
//!
//! - Enumeration failure aborts the pass: logged once, nothing else runs
//! - A send failure is logged with its service name and the pass continues
//! - An absent name is skipped silently: no log, no send
//!
//! No failure propagates out of [`run_pass`](RefreshBroadcastService::run_pass).
//!
//! [`RefreshBroadcaster`]: crate::ports::inbound::RefreshBroadcaster

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{build_refresh_transaction, BroadcastMetrics, PassStats, TransactFlags};
use crate::ports::outbound::{ControlTransport, ServiceRegistry};

/// Refresh Broadcast Service.
///
/// Walks the registry snapshot strictly in enumeration order, sequentially,
/// with no intra-pass parallelism. Deterministic ordering keeps failure
/// attribution in the logs straightforward.
///
/// ## Thread Safety
///
/// The service is thread-safe and shared across worker threads via `Arc`.
/// Passes share no mutable state beyond the cumulative metrics counters.
pub struct RefreshBroadcastService<R, T>
where
    R: ServiceRegistry,
    T: ControlTransport,
{
    /// Registry adapter, queried fresh on every pass.
    registry: Arc<R>,
    /// Transport adapter for one-way control transactions.
    transport: Arc<T>,
    /// Cumulative counters across passes.
    metrics: RwLock<BroadcastMetrics>,
}

impl<R, T> RefreshBroadcastService<R, T>
where
    R: ServiceRegistry,
    T: ControlTransport,
{
    pub fn new(registry: Arc<R>, transport: Arc<T>) -> Self {
        Self {
            registry,
            transport,
            metrics: RwLock::new(BroadcastMetrics::default()),
        }
    }

    /// Run one full broadcast pass, synchronously.
    ///
    /// Every name in the snapshot is attempted exactly once regardless of
    /// prior outcomes; there is no early termination and no retry. Returns
    /// the pass counters for logging and tests. Never panics, never
    /// returns an error: the pass is advisory end to end.
    pub fn run_pass(&self) -> PassStats {
        let pass_id = Uuid::new_v4();

        let names = match self.registry.list_service_names() {
            Ok(names) => names,
            Err(e) => {
                warn!(pass = %pass_id, error = %e, "service enumeration failed, aborting pass");
                self.metrics.write().passes_aborted += 1;
                return PassStats::aborted(pass_id);
            }
        };

        let mut stats = PassStats::started(pass_id, names.len());

        for name in names {
            stats.attempted += 1;

            // Absent is a normal outcome: no log, no send.
            let Some(handle) = self.registry.check_service(&name) else {
                stats.skipped_absent += 1;
                continue;
            };

            let (code, payload) = build_refresh_transaction();

            match self
                .transport
                .transact(&handle, code, &payload, TransactFlags::ONE_WAY)
            {
                Ok(()) => stats.reached += 1,
                Err(e) => {
                    stats.failed += 1;
                    warn!(
                        pass = %pass_id,
                        service = %name,
                        error = %e,
                        "service did not take the refresh signal"
                    );
                }
            }
            // payload dropped here, on success and failure alike
        }

        {
            let mut metrics = self.metrics.write();
            metrics.passes_completed += 1;
            metrics.sends_ok += stats.reached as u64;
            metrics.sends_failed += stats.failed as u64;
        }

        debug!(
            pass = %pass_id,
            listed = stats.names_listed,
            reached = stats.reached,
            failed = stats.failed,
            skipped = stats.skipped_absent,
            "broadcast pass complete"
        );

        stats
    }

    /// Snapshot of the cumulative broadcast metrics.
    #[must_use]
    pub fn metrics(&self) -> BroadcastMetrics {
        self.metrics.read().clone()
    }
}
