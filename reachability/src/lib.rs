//! Network reachability classification and change monitoring.
//!
//! A [`ReachabilityMonitor`] wraps one platform reachability handle for a
//! target (hostname, socket address, "any internet host", or the link-local
//! subnet) and maps the platform's flag bitset to a [`NetworkStatus`]. Callers
//! poll [`ReachabilityMonitor::current_status`] or start the notifier and
//! re-query on every [`ReachabilityChanged`] event.
//!
//! The OS binding itself lives behind the [`Platform`] and
//! [`ReachabilityHandle`] traits; this crate owns the classification rules
//! and the notifier lifecycle.

#![forbid(unsafe_code)]

pub mod classify;

mod error;
mod flags;
mod monitor;
mod platform;
mod status;

pub use crate::{
    error::{Error, FlagQueryFailed},
    flags::ReachabilityFlags,
    monitor::{MonitorId, ReachabilityChanged, ReachabilityMonitor},
    platform::{FlagChangeCallback, Platform, ReachabilityHandle},
    status::{Generation, NetworkStatus, RadioTechnology},
};
