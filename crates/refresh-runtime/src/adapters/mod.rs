//! # Adapter Implementations
//!
//! Concrete implementations of the refresh-broadcast outbound ports.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  OUTER LAYER (Adapters)                    │
//! │                       LoopbackHub                          │
//! └────────────────────────────────────────────────────────────┘
//!                       ↑ implements ↑
//! ┌────────────────────────────────────────────────────────────┐
//! │                  MIDDLE LAYER (Ports)                      │
//! │        trait ServiceRegistry, trait ControlTransport       │
//! └────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌────────────────────────────────────────────────────────────┐
//! │              INNER LAYER (refresh-broadcast)               │
//! │        Pure orchestration, no I/O, no platform deps        │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod loopback;

pub use loopback::*;
