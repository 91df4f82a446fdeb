//! Watches a simulated platform walk through a handful of connectivity
//! states and prints the status the monitor reports after each change event.
//!
//! Run with `cargo run --example watch`.

use std::{
    net::SocketAddrV4,
    sync::{Arc, Mutex},
    time::Duration,
};

use color_eyre::eyre::Result;
use reachability::{
    FlagChangeCallback, FlagQueryFailed, Platform, RadioTechnology,
    ReachabilityFlags, ReachabilityHandle, ReachabilityMonitor,
};
use tokio::time;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct SimState {
    flags: Arc<Mutex<ReachabilityFlags>>,
    radio: Arc<Mutex<Option<RadioTechnology>>>,
    callback: Arc<Mutex<Option<FlagChangeCallback>>>,
}

impl SimState {
    fn transition(&self, flags: ReachabilityFlags, radio: Option<RadioTechnology>) {
        *self.flags.lock().unwrap() = flags;
        *self.radio.lock().unwrap() = radio;
        if let Some(cb) = self.callback.lock().unwrap().as_ref() {
            cb(flags);
        }
    }
}

#[derive(Clone, Default)]
struct SimPlatform {
    state: SimState,
}

struct SimHandle {
    state: SimState,
}

impl Platform for SimPlatform {
    type Handle = SimHandle;

    fn handle_for_hostname(&self, _host: &str) -> Option<SimHandle> {
        Some(SimHandle {
            state: self.state.clone(),
        })
    }

    fn handle_for_address(&self, _addr: SocketAddrV4) -> Option<SimHandle> {
        Some(SimHandle {
            state: self.state.clone(),
        })
    }

    fn current_radio_technology(&self) -> Option<RadioTechnology> {
        self.state.radio.lock().unwrap().clone()
    }
}

impl ReachabilityHandle for SimHandle {
    fn flags(&self) -> Result<ReachabilityFlags, FlagQueryFailed> {
        Ok(*self.state.flags.lock().unwrap())
    }

    fn set_callback(&mut self, callback: FlagChangeCallback) -> bool {
        *self.state.callback.lock().unwrap() = Some(callback);
        true
    }

    fn clear_callback(&mut self) {
        self.state.callback.lock().unwrap().take();
    }

    fn schedule(&mut self) -> bool {
        true
    }

    fn unschedule(&mut self) {}
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let platform = SimPlatform::default();
    let state = platform.state.clone();

    let mut monitor = ReachabilityMonitor::for_hostname(platform, "example.com")?;
    let mut events = monitor.subscribe();

    assert!(monitor.start_notifier());
    info!("watching simulated reachability for {}", monitor.id());

    let script: Vec<(ReachabilityFlags, Option<RadioTechnology>)> = vec![
        (ReachabilityFlags::empty(), None),
        (ReachabilityFlags::REACHABLE, None),
        (
            ReachabilityFlags::REACHABLE | ReachabilityFlags::IS_WWAN,
            Some(RadioTechnology::Lte),
        ),
        (
            ReachabilityFlags::REACHABLE | ReachabilityFlags::IS_WWAN,
            Some(RadioTechnology::Gprs),
        ),
        (
            ReachabilityFlags::REACHABLE
                | ReachabilityFlags::IS_WWAN
                | ReachabilityFlags::TRANSIENT_CONNECTION,
            None,
        ),
        (ReachabilityFlags::empty(), None),
    ];

    tokio::spawn(async move {
        for (flags, radio) in script {
            time::sleep(Duration::from_millis(500)).await;
            state.transition(flags, radio);
        }
    });

    for _ in 0..6 {
        let event = events.recv().await?;
        info!(
            "monitor {}: reachability changed, now {}",
            event.monitor,
            monitor.current_status()
        );
    }

    monitor.stop_notifier();
    Ok(())
}
