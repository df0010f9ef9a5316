//! Request throttling port.

use async_trait::async_trait;
use std::time::Duration;

/// Admission gate for anonymous requests to public endpoints.
///
/// Both operations are total: a throttle decision always comes back, there
/// is no error channel. Identifier derivation (hashing a client address,
/// adding a prefix) is the caller's responsibility; the throttle treats the
/// identifier as an opaque key.
#[async_trait]
pub trait RequestThrottle: Send + Sync {
    /// Decide whether the caller behind `identifier` may proceed, counting
    /// this request against its quota if admitted.
    async fn check_and_admit(&self, identifier: &str) -> Admission;

    /// Drop state for identifiers whose quota window has expired.
    ///
    /// Pure housekeeping: admission decisions stay correct without it, only
    /// the memory footprint depends on it being called.
    async fn sweep_expired(&self);
}

/// Outcome of a single admission check.
#[derive(Debug, Clone)]
pub struct Admission {
    pub allowed: bool,
    /// Requests left in the current window (0 when denied).
    pub remaining: u32,
    /// Time until the current window expires.
    pub retry_after: Duration,
}
