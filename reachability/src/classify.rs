//! Pure mapping from a reachability flag snapshot (plus an optional radio
//! technology hint) to a [`NetworkStatus`].
//!
//! Both functions are total: every bitset maps to a defined status, and bits
//! outside the named flags are ignored.

use crate::{Generation, NetworkStatus, RadioTechnology, ReachabilityFlags};

/// Classifier for monitors restricted to local-wifi reachability.
///
/// Only the direct-and-reachable combination counts; a route through an
/// on-demand or cellular path must never report as "local network".
pub fn classify_local_only(flags: ReachabilityFlags) -> NetworkStatus {
    if flags.contains(ReachabilityFlags::IS_DIRECT)
        && flags.contains(ReachabilityFlags::REACHABLE)
    {
        NetworkStatus::ReachableViaLocalNetwork
    } else {
        NetworkStatus::NotReachable
    }
}

/// General classifier. The rule order matters: the WWAN sub-decision
/// overrides the provisional local-network result unconditionally.
pub fn classify(
    flags: ReachabilityFlags,
    radio: Option<RadioTechnology>,
) -> NetworkStatus {
    if !flags.contains(ReachabilityFlags::REACHABLE) {
        return NetworkStatus::NotReachable;
    }

    let mut status = NetworkStatus::NotReachable;

    if !flags.contains(ReachabilityFlags::CONNECTION_REQUIRED) {
        status = NetworkStatus::ReachableViaLocalNetwork;
    }

    // An on-demand link that connects without user action still counts as
    // locally reachable.
    if (flags.contains(ReachabilityFlags::CONNECTION_ON_DEMAND)
        || flags.contains(ReachabilityFlags::CONNECTION_ON_TRAFFIC))
        && !flags.contains(ReachabilityFlags::INTERVENTION_REQUIRED)
    {
        status = NetworkStatus::ReachableViaLocalNetwork;
    }

    if flags.contains(ReachabilityFlags::IS_WWAN) {
        return classify_wwan(flags, radio);
    }

    status
}

fn classify_wwan(
    flags: ReachabilityFlags,
    radio: Option<RadioTechnology>,
) -> NetworkStatus {
    // An active radio session is authoritative over the flag heuristics.
    if let Some(radio) = radio {
        return match radio.generation() {
            Generation::TwoG => NetworkStatus::ReachableVia2G,
            Generation::ThreeG => NetworkStatus::ReachableVia3G,
            Generation::FourG => NetworkStatus::ReachableVia4G,
        };
    }

    // A transient session that still requires a connection approximates a
    // slow, negotiating link.
    if flags.contains(ReachabilityFlags::TRANSIENT_CONNECTION) {
        return if flags.contains(ReachabilityFlags::CONNECTION_REQUIRED) {
            NetworkStatus::ReachableVia2G
        } else {
            NetworkStatus::ReachableVia3G
        };
    }

    NetworkStatus::ReachableViaWwan
}
