//! # Refresh Runtime Entry Point
//!
//! Startup sequence:
//!
//! 1. Initialize logging (env-filtered, default `info`)
//! 2. Load configuration from the environment
//! 3. Wire the runtime (hub, settings endpoint, broadcast service)
//! 4. Trigger a startup broadcast when configured
//! 5. One-shot mode: wait for that pass, report, exit
//! 6. Otherwise: broadcast on every SIGHUP, exit on Ctrl-C
//!
//! Broadcast outcomes never reach this layer; they are observable only in
//! the logs and the cumulative metrics.

use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use refresh_runtime::config::RuntimeConfig;
use refresh_runtime::RefreshRuntime;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let runtime = RefreshRuntime::new(RuntimeConfig::from_env());
    info!(
        endpoints = runtime.hub().binding_count(),
        "refresh runtime wired"
    );

    if runtime.config().broadcast.broadcast_on_startup {
        info!("triggering startup broadcast");
        runtime.broadcast();
    }

    if runtime.config().broadcast.oneshot {
        wait_for_first_pass(&runtime).await;
        let metrics = runtime.metrics();
        info!(
            passes = metrics.passes_completed,
            aborted = metrics.passes_aborted,
            ok = metrics.sends_ok,
            failed = metrics.sends_failed,
            "one-shot run complete"
        );
        return Ok(());
    }

    run_signal_loop(&runtime).await?;

    info!("shutting down");
    Ok(())
}

/// Poll until the detached startup pass lands in the metrics.
///
/// The trigger is fire-and-forget by contract, so the only completion
/// signal available is the metrics counter itself.
async fn wait_for_first_pass(runtime: &RefreshRuntime) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let metrics = runtime.metrics();
        if metrics.passes_completed + metrics.passes_aborted > 0 {
            return;
        }
        if tokio::time::Instant::now() >= deadline {
            info!("startup pass still pending at exit");
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Broadcast on every SIGHUP; return on Ctrl-C.
#[cfg(unix)]
async fn run_signal_loop(runtime: &RefreshRuntime) -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;
    info!("listening for SIGHUP, Ctrl-C to exit");

    loop {
        tokio::select! {
            _ = hangup.recv() => {
                info!("SIGHUP received, triggering broadcast");
                runtime.broadcast();
            }
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}

/// No SIGHUP off Unix: just wait for Ctrl-C.
#[cfg(not(unix))]
async fn run_signal_loop(_runtime: &RefreshRuntime) -> Result<()> {
    info!("Ctrl-C to exit");
    tokio::signal::ctrl_c().await?;
    Ok(())
}
