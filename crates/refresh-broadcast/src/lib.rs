//! # Refresh Broadcast Subsystem
//!
//! Delivers a best-effort "refresh" signal to every IPC service currently
//! registered on the host. Triggered after some external event (typically a
//! shared-configuration change), it enumerates all registered service names,
//! resolves each to a live handle, and sends a fixed one-way control-code
//! transaction. Each receiver decides independently how to react.
//!
//! ## Architecture Role
//!
//! ```text
//! [Trigger] ──broadcast()──→ [Scheduler] ──worker thread──→ [Orchestrator]
//!                                                                 │
//!                                          enumerate → resolve → send
//!                                                                 │
//!                                                 ┌───────┬───────┴──┐
//!                                                 ↓       ↓          ↓
//!                                            [svc A]  [svc B]  [svc C] ...
//! ```
//!
//! ## Delivery Contract
//!
//! - One-way, unordered, advisory: no delivery guarantee, no acknowledgement
//! - Per-service failure isolation: a bad endpoint never aborts the pass
//! - Fire-and-forget: the triggering call returns before the pass runs

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod domain;
pub mod events;
pub mod ports;
pub mod scheduler;
pub mod service;

// Re-export main types
pub use domain::*;
pub use events::BroadcastError;
pub use ports::inbound::RefreshBroadcaster;
pub use ports::outbound::{ControlTransport, ServiceRegistry};
pub use scheduler::BroadcastScheduler;
pub use service::RefreshBroadcastService;
