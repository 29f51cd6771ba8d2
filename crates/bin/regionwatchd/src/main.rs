//! # regionwatchd — region watch daemon
//!
//! Composition root that wires the domain and app crates to the system clock.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Build the configured regions and attach handlers that log transitions
//! - Tick the monitor on a fixed interval
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use regionwatch_app::monitor::RegionMonitor;
use regionwatch_app::ports::{Clock, SystemClock};
use regionwatch_domain::region::TemporalRegion;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Log every transition of `region` through its own handlers.
fn attach_log_handlers(region: &mut TemporalRegion) {
    region.set_on_entered(|event| {
        tracing::info!(text = %event.text, range = %event.range, at = %event.at, "entered region");
    });
    region.set_on_left(|event| {
        tracing::info!(text = %event.text, range = %event.range, at = %event.at, "left region");
    });
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let clock = SystemClock;
    let tick_interval = config.tick_interval();
    let config_interval_ms = config.monitor.tick_interval_ms;
    let enabled = config.monitor.enabled;

    let mut monitor = RegionMonitor::new(clock);
    monitor.set_enabled(enabled);
    for mut region in config.build_regions(clock.now().time())? {
        if region.range().is_wrapping() {
            tracing::warn!(
                region = %region,
                "stop is before start; the range does not span midnight and will never match"
            );
        }
        attach_log_handlers(&mut region);
        monitor.add(region);
    }
    tracing::info!(
        regions = monitor.len(),
        interval_ms = config_interval_ms,
        enabled,
        "regionwatchd started"
    );

    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                monitor.tick();
            }
            result = &mut shutdown => {
                if let Err(err) = result {
                    tracing::error!(%err, "failed to listen for shutdown signal");
                }
                break;
            }
        }
    }

    tracing::info!("regionwatchd stopped");
    Ok(())
}
