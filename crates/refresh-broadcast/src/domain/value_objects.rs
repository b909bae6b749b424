//! Value objects for the refresh broadcast: the wire constant, the per-send
//! payload buffer, transport flags, and pass/lifetime counters.

use std::fmt;

use uuid::Uuid;

/// 32-bit control code selecting which operation an IPC transaction requests.
///
/// Codes are built by packing four ASCII bytes most-significant-byte first,
/// never by inlining the resulting integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionCode(u32);

impl TransactionCode {
    /// Packs four ASCII bytes into a code, most-significant byte first.
    #[must_use]
    pub const fn pack(bytes: [u8; 4]) -> Self {
        Self(
            ((bytes[0] as u32) << 24)
                | ((bytes[1] as u32) << 16)
                | ((bytes[2] as u32) << 8)
                | (bytes[3] as u32),
        )
    }

    /// The raw 32-bit code as it crosses the transport.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// The refresh signal: packed `'_' 'S' 'P' 'R'`.
///
/// MUST stay bit-exact (`0x5F535052`) for compatibility with receivers that
/// match on this specific control code. Identical for every service and
/// constant for the life of the process.
pub const REFRESH_CODE: TransactionCode = TransactionCode::pack(*b"_SPR");

/// Flags word accompanying a control transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransactFlags(u32);

impl TransactFlags {
    /// No flags set: the caller expects a reply.
    pub const NONE: Self = Self(0);

    /// One-way call: no reply is expected and any reply is discarded.
    pub const ONE_WAY: Self = Self(1);

    /// Whether every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Data buffer attached to one control transaction.
///
/// The refresh signal always carries an empty buffer. A payload is acquired
/// fresh for each send attempt and dropped at the end of that iteration, on
/// every exit path.
#[derive(Debug, Default)]
pub struct TransactionPayload {
    buf: Vec<u8>,
}

impl TransactionPayload {
    /// Acquires a fresh, empty payload buffer.
    #[must_use]
    pub fn obtain() -> Self {
        Self::default()
    }

    /// The payload bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Number of payload bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Counters for a single broadcast pass.
///
/// Returned by the synchronous orchestrator entry point for logging and
/// tests; the fire-and-forget trigger never sees it.
#[derive(Clone, Debug)]
pub struct PassStats {
    /// Correlation id carried by every log line this pass emits.
    pub pass_id: Uuid,
    /// Names the registry enumeration returned.
    pub names_listed: usize,
    /// Resolutions attempted (one per listed name).
    pub attempted: usize,
    /// Sends the transport accepted.
    pub reached: usize,
    /// Sends the target or transport rejected.
    pub failed: usize,
    /// Names silently skipped because no live endpoint was bound.
    pub skipped_absent: usize,
    /// Whether the pass aborted before resolving anything
    /// (registry enumeration failed).
    pub aborted: bool,
}

impl PassStats {
    /// Stats for a pass that is about to walk `names_listed` names.
    #[must_use]
    pub fn started(pass_id: Uuid, names_listed: usize) -> Self {
        Self {
            pass_id,
            names_listed,
            attempted: 0,
            reached: 0,
            failed: 0,
            skipped_absent: 0,
            aborted: false,
        }
    }

    /// Stats for a pass aborted at the enumeration step.
    #[must_use]
    pub fn aborted(pass_id: Uuid) -> Self {
        Self {
            pass_id,
            names_listed: 0,
            attempted: 0,
            reached: 0,
            failed: 0,
            skipped_absent: 0,
            aborted: true,
        }
    }
}

/// Cumulative counters across all passes run by one service instance.
#[derive(Clone, Debug, Default)]
pub struct BroadcastMetrics {
    /// Passes that walked the full enumeration.
    pub passes_completed: u64,
    /// Passes aborted because enumeration failed.
    pub passes_aborted: u64,
    /// Sends accepted by the transport, across all passes.
    pub sends_ok: u64,
    /// Sends rejected, across all passes.
    pub sends_failed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_code_is_bit_exact() {
        assert_eq!(REFRESH_CODE.as_u32(), 0x5F53_5052);
    }

    #[test]
    fn test_pack_is_msb_first() {
        // '_' must land in the most significant byte, 'R' in the least.
        let code = TransactionCode::pack([b'_', b'S', b'P', b'R']);
        assert_eq!(code.as_u32() >> 24, u32::from(b'_'));
        assert_eq!(code.as_u32() & 0xFF, u32::from(b'R'));
    }

    #[test]
    fn test_code_displays_as_hex() {
        assert_eq!(REFRESH_CODE.to_string(), "0x5f535052");
    }

    #[test]
    fn test_payload_starts_empty() {
        let payload = TransactionPayload::obtain();
        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
        assert_eq!(payload.as_slice(), &[] as &[u8]);
    }

    #[test]
    fn test_one_way_flag_containment() {
        assert!(TransactFlags::ONE_WAY.contains(TransactFlags::ONE_WAY));
        assert!(TransactFlags::ONE_WAY.contains(TransactFlags::NONE));
        assert!(!TransactFlags::NONE.contains(TransactFlags::ONE_WAY));
    }

    #[test]
    fn test_pass_stats_constructors() {
        let id = Uuid::new_v4();
        let started = PassStats::started(id, 3);
        assert_eq!(started.names_listed, 3);
        assert!(!started.aborted);

        let aborted = PassStats::aborted(id);
        assert_eq!(aborted.names_listed, 0);
        assert!(aborted.aborted);
    }
}
