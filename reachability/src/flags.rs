use std::ops::{BitOr, BitOrAssign};

/// Snapshot of the platform's reachability flag bitset for one target.
///
/// A snapshot is a plain `Copy` value; the platform hands it over whole, so no
/// partially updated state is ever observable. Bits outside the named
/// constants are preserved but never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReachabilityFlags(u32);

impl ReachabilityFlags {
    /// The target can currently be reached with the present configuration.
    pub const REACHABLE: ReachabilityFlags = ReachabilityFlags(1 << 1);
    /// Reaching the target requires a connection to be established first.
    pub const CONNECTION_REQUIRED: ReachabilityFlags = ReachabilityFlags(1 << 2);
    /// A connection will be established on the first traffic to the target.
    pub const CONNECTION_ON_TRAFFIC: ReachabilityFlags = ReachabilityFlags(1 << 3);
    /// Establishing a connection needs user intervention (credentials etc.).
    pub const INTERVENTION_REQUIRED: ReachabilityFlags = ReachabilityFlags(1 << 4);
    /// A connection will be established on demand by the session layer.
    pub const CONNECTION_ON_DEMAND: ReachabilityFlags = ReachabilityFlags(1 << 5);
    /// The connection to the target is transient (e.g. a dial-up style link).
    pub const TRANSIENT_CONNECTION: ReachabilityFlags = ReachabilityFlags(1 << 0);
    /// The target resolves to an address bound to a local interface.
    pub const IS_LOCAL_ADDRESS: ReachabilityFlags = ReachabilityFlags(1 << 16);
    /// Traffic to the target does not pass through a gateway.
    pub const IS_DIRECT: ReachabilityFlags = ReachabilityFlags(1 << 17);
    /// The route to the target goes over the cellular (WWAN) interface.
    pub const IS_WWAN: ReachabilityFlags = ReachabilityFlags(1 << 18);

    pub const fn empty() -> Self {
        ReachabilityFlags(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        ReachabilityFlags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `true` iff every bit of `other` is set in `self`.
    pub const fn contains(self, other: ReachabilityFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ReachabilityFlags {
    type Output = ReachabilityFlags;

    fn bitor(self, rhs: ReachabilityFlags) -> ReachabilityFlags {
        ReachabilityFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ReachabilityFlags {
    fn bitor_assign(&mut self, rhs: ReachabilityFlags) {
        self.0 |= rhs.0;
    }
}
