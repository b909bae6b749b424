//! # Svc-Refresh Runtime
//!
//! Wires the refresh-broadcast subsystem to its in-process adapters:
//!
//! - `adapters/` - the [`LoopbackHub`] implementing both outbound ports
//! - `settings` - the shared-settings endpoint that reloads on refresh
//! - `config` - runtime configuration with environment overrides
//!
//! The binary (`src/main.rs`) triggers a pass at startup and on SIGHUP;
//! embedders can instead hold a [`RefreshRuntime`] and call
//! [`broadcast`](RefreshRuntime::broadcast) from their own trigger.

pub mod adapters;
pub mod config;
pub mod settings;

use std::sync::Arc;

use refresh_broadcast::{
    BroadcastMetrics, BroadcastScheduler, RefreshBroadcastService, RefreshBroadcaster, ServiceName,
};

use crate::adapters::{ControlEndpoint, LoopbackHub};
use crate::config::RuntimeConfig;
use crate::settings::{SharedSettings, SETTINGS_SERVICE};

/// The assembled runtime: hub, settings endpoint, broadcast service, and
/// the fire-and-forget trigger.
pub struct RefreshRuntime {
    config: RuntimeConfig,
    hub: Arc<LoopbackHub>,
    settings: Arc<SharedSettings>,
    service: Arc<RefreshBroadcastService<LoopbackHub, LoopbackHub>>,
    trigger: BroadcastScheduler<LoopbackHub, LoopbackHub>,
}

impl RefreshRuntime {
    /// Wire up the runtime: build the hub, register the settings endpoint,
    /// and stand up the broadcast service over the hub's two ports.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        let hub = Arc::new(LoopbackHub::new());

        let settings = Arc::new(SharedSettings::load(config.settings.env_prefix.clone()));
        hub.register(
            ServiceName::new(SETTINGS_SERVICE),
            Arc::clone(&settings) as Arc<dyn ControlEndpoint>,
        );

        let service = Arc::new(RefreshBroadcastService::new(
            Arc::clone(&hub),
            Arc::clone(&hub),
        ));
        let trigger = BroadcastScheduler::new(Arc::clone(&service));

        Self {
            config,
            hub,
            settings,
            service,
            trigger,
        }
    }

    /// The loopback hub, for registering further endpoints.
    #[must_use]
    pub fn hub(&self) -> &Arc<LoopbackHub> {
        &self.hub
    }

    /// The shared settings snapshot.
    #[must_use]
    pub fn settings(&self) -> &Arc<SharedSettings> {
        &self.settings
    }

    /// The configuration this runtime was wired with.
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Fire-and-forget: trigger a broadcast pass and return immediately.
    pub fn broadcast(&self) {
        self.trigger.broadcast();
    }

    /// Snapshot of the cumulative broadcast metrics.
    #[must_use]
    pub fn metrics(&self) -> BroadcastMetrics {
        self.service.metrics()
    }
}
