//! End-to-end broadcast over the loopback hub: registered endpoints all see
//! the refresh code exactly once per pass, misbehaving endpoints stay
//! contained, and the wired runtime reloads settings from a detached pass.

use std::env;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use refresh_broadcast::{
    RefreshBroadcastService, ServiceName, ServiceRegistry, TransactionCode, REFRESH_CODE,
};
use refresh_runtime::adapters::{ControlEndpoint, ControlRejection, LoopbackHub};
use refresh_runtime::config::RuntimeConfig;
use refresh_runtime::settings::SETTINGS_SERVICE;
use refresh_runtime::RefreshRuntime;

/// Endpoint recording every control code it receives.
#[derive(Default)]
struct RecordingEndpoint {
    seen: Mutex<Vec<u32>>,
}

impl ControlEndpoint for RecordingEndpoint {
    fn handle_control(&self, code: TransactionCode, payload: &[u8]) -> Result<(), ControlRejection> {
        assert!(payload.is_empty(), "refresh payload must be empty");
        self.seen.lock().push(code.as_u32());
        Ok(())
    }
}

/// Endpoint that implements no control codes at all.
struct DeafEndpoint;

impl ControlEndpoint for DeafEndpoint {
    fn handle_control(
        &self,
        _code: TransactionCode,
        _payload: &[u8],
    ) -> Result<(), ControlRejection> {
        Err(ControlRejection::UnsupportedCode)
    }
}

#[test]
fn test_every_registered_endpoint_is_poked_despite_a_deaf_one() {
    let hub = Arc::new(LoopbackHub::new());

    let first = Arc::new(RecordingEndpoint::default());
    let last = Arc::new(RecordingEndpoint::default());
    hub.register(ServiceName::new("first"), Arc::clone(&first) as Arc<dyn ControlEndpoint>);
    hub.register(ServiceName::new("deaf"), Arc::new(DeafEndpoint) as Arc<dyn ControlEndpoint>);
    hub.register(ServiceName::new("last"), Arc::clone(&last) as Arc<dyn ControlEndpoint>);

    let service = RefreshBroadcastService::new(Arc::clone(&hub), Arc::clone(&hub));
    let stats = service.run_pass();

    assert_eq!(stats.names_listed, 3);
    assert_eq!(stats.reached, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.skipped_absent, 0);

    // Endpoints after the deaf one are still reached, each exactly once,
    // with the bit-exact refresh code.
    assert_eq!(*first.seen.lock(), vec![REFRESH_CODE.as_u32()]);
    assert_eq!(*last.seen.lock(), vec![REFRESH_CODE.as_u32()]);
    assert_eq!(REFRESH_CODE.as_u32(), 0x5F53_5052);
}

#[test]
fn test_second_pass_reenumerates_instead_of_reusing_anything() {
    let hub = Arc::new(LoopbackHub::new());
    let endpoint = Arc::new(RecordingEndpoint::default());
    let id = hub.register(
        ServiceName::new("transient"),
        Arc::clone(&endpoint) as Arc<dyn ControlEndpoint>,
    );

    let service = RefreshBroadcastService::new(Arc::clone(&hub), Arc::clone(&hub));

    let stats = service.run_pass();
    assert_eq!(stats.reached, 1);

    // Deregistration between passes: the next pass sees an empty registry,
    // not a cached handle.
    hub.deregister(id);
    let stats = service.run_pass();
    assert_eq!(stats.names_listed, 0);
    assert_eq!(stats.reached, 0);
    assert_eq!(endpoint.seen.lock().len(), 1);
}

#[test]
fn test_wired_runtime_reloads_settings_through_a_detached_pass() {
    env::set_var("REFRESH_SETTING_IT_MODE", "initial");

    let runtime = RefreshRuntime::new(RuntimeConfig::default());
    assert_eq!(
        runtime.settings().get("REFRESH_SETTING_IT_MODE"),
        Some("initial".to_string())
    );
    assert_eq!(runtime.hub().binding_count(), 1);
    assert!(runtime
        .hub()
        .check_service(&ServiceName::new(SETTINGS_SERVICE))
        .is_some());

    env::set_var("REFRESH_SETTING_IT_MODE", "updated");
    runtime.broadcast();

    // The trigger returned immediately; completion is only observable via
    // the metrics counters.
    let deadline = Instant::now() + Duration::from_secs(5);
    while runtime.metrics().passes_completed == 0 {
        assert!(Instant::now() < deadline, "broadcast pass never completed");
        thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(
        runtime.settings().get("REFRESH_SETTING_IT_MODE"),
        Some("updated".to_string())
    );
    let metrics = runtime.metrics();
    assert_eq!(metrics.sends_ok, 1);
    assert_eq!(metrics.sends_failed, 0);
}
