use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The platform refused to create a reachability handle for the target.
    #[error("platform could not create a reachability handle for `{target}`")]
    ResolutionUnavailable { target: String },
}

/// The platform could not report a flag snapshot.
///
/// This never escapes a [`crate::ReachabilityMonitor`]: missing information is
/// treated as "not reachable" and "no connection required".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("platform could not report current reachability flags")]
pub struct FlagQueryFailed;
