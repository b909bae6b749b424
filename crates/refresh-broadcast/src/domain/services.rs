//! Domain operations for the refresh broadcast.

use super::{TransactionCode, TransactionPayload, REFRESH_CODE};

/// Builds the fixed refresh transaction.
///
/// Pure and deterministic: always the same control code and a fresh, empty
/// payload buffer. Called once per send attempt so every attempt gets its
/// own payload to drop when the iteration ends.
#[must_use]
pub fn build_refresh_transaction() -> (TransactionCode, TransactionPayload) {
    (REFRESH_CODE, TransactionPayload::obtain())
}
