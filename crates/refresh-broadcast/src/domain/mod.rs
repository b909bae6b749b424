//! # Domain Layer for Refresh Broadcast
//!
//! Pure business logic with no I/O dependencies. This is the innermost layer
//! of the hexagonal architecture.
//!
//! ## Contents
//!
//! - **entities**: Core identifiers (`ServiceName`, `ServiceHandle`)
//! - **value_objects**: Wire constant and counters (`TransactionCode`,
//!   `TransactionPayload`, `TransactFlags`, `PassStats`, `BroadcastMetrics`)
//! - **services**: Domain operations (`build_refresh_transaction`)
//!
//! ## Design Principles
//!
//! 1. **No I/O**: All functions are pure and synchronous
//! 2. **No External Dependencies**: Only `uuid` for pass correlation
//! 3. **Testable**: All logic can be unit tested without mocks

mod entities;
mod services;
mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
