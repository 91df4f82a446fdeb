use std::{
    net::{Ipv4Addr, SocketAddrV4},
    sync::atomic::{AtomicU64, Ordering},
};

use derive_more::Display;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::{
    classify::{classify, classify_local_only},
    platform::{Platform, ReachabilityHandle},
    Error, NetworkStatus, ReachabilityFlags,
};

/// Link-local base address used by [`ReachabilityMonitor::for_local_subnet`].
const LOCAL_SUBNET_ADDR: Ipv4Addr = Ipv4Addr::new(169, 254, 0, 0);

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Identity of one monitor, carried by every [`ReachabilityChanged`] event so
/// subscribers sharing a channel can filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct MonitorId(u64);

impl MonitorId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        MonitorId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Reachability of the emitting monitor's target changed. Carries no status;
/// consumers call [`ReachabilityMonitor::current_status`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachabilityChanged {
    pub monitor: MonitorId,
}

/// Tracks the reachability of one target through a platform handle.
///
/// Callers either poll [`current_status`](Self::current_status) or start the
/// notifier and re-query on every [`ReachabilityChanged`] event. The handle is
/// exclusively owned; the notifier registration is torn down on drop no matter
/// how the monitor goes away.
pub struct ReachabilityMonitor<P: Platform> {
    id: MonitorId,
    platform: P,
    handle: P::Handle,
    local_wifi_only: bool,
    scheduled: bool,
    events: broadcast::Sender<ReachabilityChanged>,
}

impl<P: Platform> ReachabilityMonitor<P> {
    pub fn for_hostname(platform: P, host: &str) -> Result<Self, Error> {
        let handle = platform.handle_for_hostname(host).ok_or_else(|| {
            Error::ResolutionUnavailable {
                target: host.to_owned(),
            }
        })?;

        Ok(Self::new(platform, handle, false))
    }

    pub fn for_address(platform: P, addr: SocketAddrV4) -> Result<Self, Error> {
        let handle = platform.handle_for_address(addr).ok_or_else(|| {
            Error::ResolutionUnavailable {
                target: addr.to_string(),
            }
        })?;

        Ok(Self::new(platform, handle, false))
    }

    /// Monitors "any internet host" via the unspecified IPv4 address.
    pub fn for_internet_connection(platform: P) -> Result<Self, Error> {
        let addr = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0);
        let handle = platform.handle_for_address(addr).ok_or_else(|| {
            Error::ResolutionUnavailable {
                target: addr.to_string(),
            }
        })?;

        Ok(Self::new(platform, handle, false))
    }

    /// Monitors the link-local subnet. The resulting monitor reports only
    /// direct, non-cellular reachability.
    pub fn for_local_subnet(platform: P) -> Result<Self, Error> {
        let addr = SocketAddrV4::new(LOCAL_SUBNET_ADDR, 0);
        let handle = platform.handle_for_address(addr).ok_or_else(|| {
            Error::ResolutionUnavailable {
                target: addr.to_string(),
            }
        })?;

        Ok(Self::new(platform, handle, true))
    }

    fn new(platform: P, handle: P::Handle, local_wifi_only: bool) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            id: MonitorId::next(),
            platform,
            handle,
            local_wifi_only,
            scheduled: false,
            events,
        }
    }

    pub fn id(&self) -> MonitorId {
        self.id
    }

    pub fn local_wifi_only(&self) -> bool {
        self.local_wifi_only
    }

    /// Queries a fresh flag snapshot and classifies it. Fails closed to
    /// [`NetworkStatus::NotReachable`] when the platform cannot report flags.
    pub fn current_status(&self) -> NetworkStatus {
        let Ok(flags) = self.handle.flags() else {
            warn!(monitor = %self.id, "flag query failed, reporting not reachable");
            return NetworkStatus::NotReachable;
        };

        if self.local_wifi_only {
            return classify_local_only(flags);
        }

        let radio = flags
            .contains(ReachabilityFlags::IS_WWAN)
            .then(|| self.platform.current_radio_technology())
            .flatten();

        classify(flags, radio)
    }

    /// The connection-required bit of a fresh snapshot; `false` when the
    /// query fails.
    pub fn connection_required(&self) -> bool {
        match self.handle.flags() {
            Ok(flags) => flags.contains(ReachabilityFlags::CONNECTION_REQUIRED),
            Err(_) => false,
        }
    }

    /// Observers of this monitor's status-changed events. Each platform
    /// flag-change event produces exactly one broadcast.
    pub fn subscribe(&self) -> broadcast::Receiver<ReachabilityChanged> {
        self.events.subscribe()
    }

    /// Registers for push delivery of flag changes. Returns `true` only if
    /// both the callback installation and the scheduling step succeed; on a
    /// scheduling failure the callback is removed again, leaving no partial
    /// registration. A no-op returning `true` while already started.
    pub fn start_notifier(&mut self) -> bool {
        if self.scheduled {
            return true;
        }

        let events = self.events.clone();
        let id = self.id;
        let installed = self.handle.set_callback(Box::new(move |_flags| {
            // Send only fails with zero subscribers; events are lossy by
            // design, consumers re-query on receipt.
            let _ = events.send(ReachabilityChanged { monitor: id });
        }));

        if !installed {
            warn!(monitor = %self.id, "platform rejected flag-change callback");
            return false;
        }

        if !self.handle.schedule() {
            warn!(monitor = %self.id, "platform rejected scheduling, rolling back callback");
            self.handle.clear_callback();
            return false;
        }

        debug!(monitor = %self.id, "notifier started");
        self.scheduled = true;
        true
    }

    /// Unschedules push delivery. Idempotent; safe to call when the notifier
    /// was never started.
    pub fn stop_notifier(&mut self) {
        if !self.scheduled {
            return;
        }

        self.handle.unschedule();
        self.handle.clear_callback();
        self.scheduled = false;
        debug!(monitor = %self.id, "notifier stopped");
    }
}

impl<P: Platform> Drop for ReachabilityMonitor<P> {
    fn drop(&mut self) {
        self.stop_notifier();
    }
}
