//! Error types for the refresh broadcast subsystem.

use thiserror::Error;

use crate::domain::TransactionCode;

/// Refresh broadcast errors.
///
/// None of these is ever fatal to the host process and none propagates to a
/// trigger caller. `RegistryUnavailable` aborts the current pass;
/// `TransactionFailure` is logged with its service name and the pass
/// continues. A name with no live endpoint is NOT an error and has no
/// variant here.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// The enumeration step could not complete.
    #[error("service registry unavailable: {0}")]
    RegistryUnavailable(String),

    /// A resolved endpoint rejected the control transaction, does not
    /// implement it, or the transport itself errored. Routine for services
    /// that do not understand the refresh signal.
    #[error("transaction {code} failed: {detail}")]
    TransactionFailure {
        code: TransactionCode,
        detail: String,
    },
}
