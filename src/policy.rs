use std::time::Duration;

/// Bounded retry schedule for one outbound request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Total number of physical attempts, including the first.
    /// Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Base backoff in milliseconds (exponential strategy).
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1_000,
        }
    }
}

impl RetryPolicy {
    /// Number of attempts the retry loop will actually run.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Backoff applied after failed attempt `attempt` (0-indexed):
    /// `2^attempt * base_delay_ms`, saturating.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = attempt.min(16);
        let multiplier = 1u64 << exp;
        Duration::from_millis(self.base_delay_ms.saturating_mul(multiplier))
    }
}
