//! The platform reachability primitive, kept behind traits so the OS binding
//! stays an external collaborator and tests can script it.

use std::net::SocketAddrV4;

use crate::{FlagQueryFailed, RadioTechnology, ReachabilityFlags};

/// Invoked by the platform with the new flag snapshot whenever the flags for
/// a scheduled handle change.
pub type FlagChangeCallback = Box<dyn Fn(ReachabilityFlags) + Send + Sync>;

/// Factory for reachability handles plus the auxiliary radio technology
/// query. One platform can hand out many handles.
pub trait Platform {
    type Handle: ReachabilityHandle;

    /// `None` if the platform rejects the name (e.g. empty or malformed).
    fn handle_for_hostname(&self, host: &str) -> Option<Self::Handle>;

    /// `None` if the platform rejects the address.
    fn handle_for_address(&self, addr: SocketAddrV4) -> Option<Self::Handle>;

    /// The active cellular radio technology, if any session is up. Consulted
    /// only when a WWAN flag set is being classified.
    fn current_radio_technology(&self) -> Option<RadioTechnology>;
}

/// An opaque per-target handle that can be queried for a flag snapshot and
/// scheduled for push delivery of flag changes.
///
/// A handle is exclusively owned by one monitor, which serializes all calls.
pub trait ReachabilityHandle {
    /// Current flag snapshot, read atomically.
    fn flags(&self) -> Result<ReachabilityFlags, FlagQueryFailed>;

    /// Installs the flag-change callback. `false` if the platform rejects it.
    fn set_callback(&mut self, callback: FlagChangeCallback) -> bool;

    /// Removes a previously installed callback. No-op if none is installed.
    fn clear_callback(&mut self);

    /// Starts push delivery on the caller's reactor. `false` on failure.
    fn schedule(&mut self) -> bool;

    /// Stops push delivery. No-op if not scheduled.
    fn unschedule(&mut self);
}
