use chrono::{DateTime, Utc};

/// Per-client counter for the current fixed window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitRecord {
    /// Requests admitted since the window opened
    pub count: u32,
    /// Instant the window closes and the counter starts over
    pub reset_at: DateTime<Utc>,
}

impl RateLimitRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.reset_at
    }
}

/// Outcome of checking one request against the limiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitDecision {
    Admitted {
        /// Position of this request within the window (1-based)
        count: u32,
        remaining: u32,
        reset_at: DateTime<Utc>,
    },
    Rejected {
        /// Whole seconds until the window resets, rounded up
        retry_after: u64,
        reset_at: DateTime<Utc>,
    },
}
