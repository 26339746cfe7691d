//! Bounded fixed-interval retry.
//!
//! Fragment injection can race the initializer looking for elements inside
//! the new markup. Instead of an ad hoc polling loop, the initializers use
//! one combinator: attempt, wait a fixed interval, cap attempts, then let
//! the caller fall back.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Attempt ceiling and fixed wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum number of attempts; at least one attempt is always made.
    pub max_attempts: u32,
    /// Wait between attempts, in milliseconds.
    pub interval_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval_ms: 150,
        }
    }
}

impl RetryPolicy {
    /// Create a policy.
    pub fn new(max_attempts: u32, interval_ms: u64) -> Self {
        Self {
            max_attempts,
            interval_ms,
        }
    }

    /// The fixed wait between attempts.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Run `op` until it yields `Some`, waiting `policy.interval()` between
/// attempts, at most `policy.max_attempts` times.
///
/// The wait is caller-supplied so the browser passes a timer future and
/// tests pass a no-op. Returns `None` once the ceiling is hit.
pub async fn retry<T, Op, OpFut, Wait, WaitFut>(
    policy: RetryPolicy,
    mut op: Op,
    mut wait: Wait,
) -> Option<T>
where
    Op: FnMut(u32) -> OpFut,
    OpFut: Future<Output = Option<T>>,
    Wait: FnMut(Duration) -> WaitFut,
    WaitFut: Future<Output = ()>,
{
    for attempt in 0..policy.max_attempts.max(1) {
        if attempt > 0 {
            wait(policy.interval()).await;
        }
        if let Some(value) = op(attempt).await {
            return Some(value);
        }
    }
    None
}
