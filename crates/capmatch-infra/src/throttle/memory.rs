//! In-memory fixed-window request throttle.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use capmatch_core::ports::{Admission, RequestThrottle};

/// Per-identifier counter state.
struct WindowRecord {
    count: u32,
    window_end: Instant,
}

/// Throttle configuration.
#[derive(Debug, Clone)]
pub struct ThrottleConfig {
    /// Maximum admitted requests per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl ThrottleConfig {
    pub fn from_env() -> Self {
        Self {
            max_requests: std::env::var("THROTTLE_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            window: Duration::from_secs(
                std::env::var("THROTTLE_WINDOW_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }
}

/// Fixed-window admission gate keyed by an opaque caller identifier.
///
/// Each identifier gets up to `max_requests` admissions per window; the
/// quota resets at `window_end` rather than sliding, so a burst straddling
/// a window boundary can see up to twice the limit in close succession.
/// A record whose window has passed counts as absent and is replaced on
/// next access; `sweep_expired` reclaims the ones never touched again.
///
/// Limits are per-process. A deployment that needs cross-instance
/// consistency has to swap this for an externally shared counter store.
pub struct FixedWindowThrottle {
    records: Mutex<HashMap<String, WindowRecord>>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowThrottle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            // the limit is contractually a positive integer
            max_requests: config.max_requests.max(1),
            window: config.window,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ThrottleConfig::from_env())
    }

    // A record is stale from window_end onwards: a call landing at exactly
    // window_end starts a fresh window.
    fn is_expired(record: &WindowRecord, now: Instant) -> bool {
        now >= record.window_end
    }

    /// Admission check against an explicit clock.
    ///
    /// The trait entry point feeds in `Instant::now()`; tests drive time
    /// deterministically through this method.
    pub async fn check_and_admit_at(&self, identifier: &str, now: Instant) -> Admission {
        let mut records = self.records.lock().await;

        // fresh identifiers enter with count 0 and are admitted below
        let record = records
            .entry(identifier.to_string())
            .or_insert_with(|| WindowRecord {
                count: 0,
                window_end: now + self.window,
            });

        // a stale record is replaced, never incremented
        if Self::is_expired(record, now) {
            record.count = 1;
            record.window_end = now + self.window;
            return Admission {
                allowed: true,
                remaining: self.max_requests - 1,
                retry_after: self.window,
            };
        }

        if record.count >= self.max_requests {
            return Admission {
                allowed: false,
                remaining: 0,
                retry_after: record.window_end.saturating_duration_since(now),
            };
        }

        record.count += 1;
        Admission {
            allowed: true,
            remaining: self.max_requests - record.count,
            retry_after: record.window_end.saturating_duration_since(now),
        }
    }

    /// Sweep against an explicit clock; see `check_and_admit_at`.
    pub async fn sweep_expired_at(&self, now: Instant) {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|_, record| !Self::is_expired(record, now));

        let removed = before - records.len();
        if removed > 0 {
            tracing::debug!(
                removed,
                tracked = records.len(),
                "Swept expired throttle records"
            );
        }
    }

    /// Number of identifiers currently tracked.
    pub async fn tracked(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl RequestThrottle for FixedWindowThrottle {
    async fn check_and_admit(&self, identifier: &str) -> Admission {
        self.check_and_admit_at(identifier, Instant::now()).await
    }

    async fn sweep_expired(&self) {
        self.sweep_expired_at(Instant::now()).await;
    }
}
