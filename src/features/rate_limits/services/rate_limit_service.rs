use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use tokio::task::JoinHandle;

use crate::core::config::RateLimitConfig;
use crate::features::rate_limits::models::{RateLimitDecision, RateLimitRecord};

/// In-memory fixed-window limiter keyed by client identifier.
///
/// Windows start at a client's first request and reset discretely, so a
/// burst straddling the boundary can admit up to twice the nominal rate.
pub struct RateLimitService {
    records: DashMap<String, RateLimitRecord>,
    max_requests: u32,
    window: TimeDelta,
}

impl RateLimitService {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            records: DashMap::new(),
            max_requests: config.max_requests,
            window: TimeDelta::milliseconds(config.window.as_millis() as i64),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Check and count a request from `key` at the current time
    pub fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, Utc::now())
    }

    pub fn check_at(&self, key: &str, now: DateTime<Utc>) -> RateLimitDecision {
        let mut record = self
            .records
            .entry(key.to_string())
            .or_insert_with(|| RateLimitRecord {
                count: 0,
                reset_at: now + self.window,
            });

        if record.is_expired(now) {
            *record = RateLimitRecord {
                count: 0,
                reset_at: now + self.window,
            };
        }

        if record.count >= self.max_requests {
            let retry_after = Self::seconds_until(now, record.reset_at);
            tracing::debug!("Rate limit hit for {}: retry after {}s", key, retry_after);
            return RateLimitDecision::Rejected {
                retry_after,
                reset_at: record.reset_at,
            };
        }

        record.count += 1;

        RateLimitDecision::Admitted {
            count: record.count,
            remaining: self.max_requests - record.count,
            reset_at: record.reset_at,
        }
    }

    /// Drop records whose window has already closed, returning how many went
    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| !record.is_expired(now));
        before.saturating_sub(self.records.len())
    }

    pub fn tracked_clients(&self) -> usize {
        self.records.len()
    }

    /// Periodically purge expired windows so idle clients don't accumulate
    pub fn spawn_sweeper(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            tracing::info!("Rate limit sweeper started (interval: {:?})", every);

            loop {
                interval.tick().await;
                let purged = self.purge_expired_at(Utc::now());
                if purged > 0 {
                    tracing::debug!(
                        "Purged {} expired rate limit windows, {} still tracked",
                        purged,
                        self.tracked_clients()
                    );
                }
            }
        })
    }

    fn seconds_until(now: DateTime<Utc>, reset_at: DateTime<Utc>) -> u64 {
        let millis = (reset_at - now).num_milliseconds().max(0) as u64;
        millis.div_ceil(1000)
    }
}
