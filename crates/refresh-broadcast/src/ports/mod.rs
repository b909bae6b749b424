//! Ports for the refresh broadcast subsystem.
//!
//! Inbound ports are the API this subsystem offers; outbound ports are the
//! contracts its adapters must fulfil (the platform service registry and the
//! control-transaction transport).

pub mod inbound;
pub mod outbound;
