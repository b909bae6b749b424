//! Background scheduler for broadcast passes.
//!
//! Implements the [`RefreshBroadcaster`] inbound port by running each pass
//! on its own detached worker thread. The triggering call returns
//! immediately; no completion signal, return value, or error ever reaches
//! the caller. A pass cannot be cancelled, but it is short-lived by
//! construction (bounded by registry size).

use std::sync::Arc;
use std::thread;

use tracing::warn;

use crate::ports::inbound::RefreshBroadcaster;
use crate::ports::outbound::{ControlTransport, ServiceRegistry};
use crate::service::RefreshBroadcastService;

/// Name given to broadcast worker threads.
const WORKER_THREAD_NAME: &str = "refresh-broadcast";

/// Fire-and-forget wrapper around [`RefreshBroadcastService`].
///
/// One dedicated worker thread per trigger. Concurrent triggers spawn
/// independent workers over independently fetched enumeration snapshots.
pub struct BroadcastScheduler<R, T>
where
    R: ServiceRegistry + 'static,
    T: ControlTransport + 'static,
{
    service: Arc<RefreshBroadcastService<R, T>>,
}

impl<R, T> BroadcastScheduler<R, T>
where
    R: ServiceRegistry + 'static,
    T: ControlTransport + 'static,
{
    pub fn new(service: Arc<RefreshBroadcastService<R, T>>) -> Self {
        Self { service }
    }
}

impl<R, T> RefreshBroadcaster for BroadcastScheduler<R, T>
where
    R: ServiceRegistry + 'static,
    T: ControlTransport + 'static,
{
    fn broadcast(&self) {
        let service = Arc::clone(&self.service);
        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let _ = service.run_pass();
            });

        // A spawn failure gets the same treatment as any other failure in
        // this subsystem: logged, never propagated.
        if let Err(e) = spawned {
            warn!(error = %e, "failed to spawn broadcast worker");
        }
    }
}
