//! # Loopback Hub
//!
//! In-process implementation of both refresh-broadcast outbound ports over a
//! single registration table. The single-process counterpart of a platform
//! service directory: suitable for one-process deployments and tests, while
//! platform adapters would implement the same two ports against the host's
//! real registry.
//!
//! Local components register a named [`ControlEndpoint`]; the hub enumerates
//! registrations in insertion order and delivers control transactions to
//! them. A registration can be withdrawn at any time, after which the name
//! no longer enumerates and any handle already minted for it goes stale.

use std::sync::Arc;

use parking_lot::RwLock;

use refresh_broadcast::{
    BroadcastError, ControlTransport, ServiceHandle, ServiceName, ServiceRegistry, TransactFlags,
    TransactionCode, TransactionPayload,
};

/// Why a hosted endpoint declined a control transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlRejection {
    /// The endpoint does not implement the requested code.
    UnsupportedCode,
    /// The endpoint understood the code but failed to act on it.
    HandlerFailed,
}

/// Control-transaction receiver hosted on the loopback hub.
pub trait ControlEndpoint: Send + Sync {
    /// Handle one control transaction.
    ///
    /// Callers treat any rejection as routine; returning an error here
    /// never affects other endpoints.
    fn handle_control(
        &self,
        code: TransactionCode,
        payload: &[u8],
    ) -> Result<(), ControlRejection>;
}

/// Identifier for one registration, used to withdraw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationId(u64);

struct Binding {
    name: ServiceName,
    token: u64,
    endpoint: Arc<dyn ControlEndpoint>,
}

#[derive(Default)]
struct HubState {
    next_token: u64,
    /// Insertion order here is enumeration order for the registry port.
    bindings: Vec<Binding>,
}

/// In-process service registry and control transport.
pub struct LoopbackHub {
    inner: RwLock<HubState>,
}

impl LoopbackHub {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HubState::default()),
        }
    }

    /// Register a named endpoint.
    ///
    /// Re-registering an existing name rebinds it in place (keeping its
    /// enumeration position) and stales any handle minted for the old
    /// binding. Names stay unique within any enumeration snapshot.
    pub fn register(
        &self,
        name: ServiceName,
        endpoint: Arc<dyn ControlEndpoint>,
    ) -> RegistrationId {
        let mut state = self.inner.write();
        state.next_token += 1;
        let token = state.next_token;

        if let Some(existing) = state.bindings.iter_mut().find(|b| b.name == name) {
            existing.token = token;
            existing.endpoint = endpoint;
        } else {
            state.bindings.push(Binding {
                name,
                token,
                endpoint,
            });
        }
        RegistrationId(token)
    }

    /// Withdraw a registration. A stale id is a no-op.
    pub fn deregister(&self, id: RegistrationId) {
        self.inner.write().bindings.retain(|b| b.token != id.0);
    }

    /// Number of currently registered endpoints.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.inner.read().bindings.len()
    }
}

impl Default for LoopbackHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistry for LoopbackHub {
    fn list_service_names(&self) -> Result<Vec<ServiceName>, BroadcastError> {
        Ok(self
            .inner
            .read()
            .bindings
            .iter()
            .map(|b| b.name.clone())
            .collect())
    }

    fn check_service(&self, name: &ServiceName) -> Option<ServiceHandle> {
        self.inner
            .read()
            .bindings
            .iter()
            .find(|b| b.name == *name)
            .map(|b| ServiceHandle::from_raw(b.token))
    }
}

impl ControlTransport for LoopbackHub {
    fn transact(
        &self,
        handle: &ServiceHandle,
        code: TransactionCode,
        payload: &TransactionPayload,
        _flags: TransactFlags,
    ) -> Result<(), BroadcastError> {
        // Snapshot the endpoint, then call it outside the lock: a handler
        // that re-enters the hub must not deadlock.
        let endpoint = {
            let state = self.inner.read();
            match state.bindings.iter().find(|b| b.token == handle.raw()) {
                Some(binding) => Arc::clone(&binding.endpoint),
                None => {
                    return Err(BroadcastError::TransactionFailure {
                        code,
                        detail: format!("stale handle {:#x}", handle.raw()),
                    });
                }
            }
        };

        endpoint
            .handle_control(code, payload.as_slice())
            .map_err(|rejection| BroadcastError::TransactionFailure {
                code,
                detail: match rejection {
                    ControlRejection::UnsupportedCode => "unsupported control code".to_string(),
                    ControlRejection::HandlerFailed => "endpoint handler failed".to_string(),
                },
            })
    }
}
