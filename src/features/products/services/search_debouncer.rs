use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Per-client trailing-edge debounce.
///
/// Each call waits out the quiet period; only the most recent call for a
/// client is told to proceed, every earlier one learns it was superseded.
pub struct SearchDebouncer {
    delay: Duration,
    sequence: AtomicU64,
    latest: DashMap<String, u64>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sequence: AtomicU64::new(0),
            latest: DashMap::new(),
        }
    }

    /// Wait for the quiet period; `true` if no newer call arrived meanwhile
    pub async fn settle(&self, client: &str) -> bool {
        if self.delay.is_zero() {
            return true;
        }

        let ticket = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        self.latest.insert(client.to_string(), ticket);
        let slot = PendingSlot {
            latest: &self.latest,
            client,
            ticket,
        };

        tokio::time::sleep(self.delay).await;

        slot.release()
    }

    pub fn pending_clients(&self) -> usize {
        self.latest.len()
    }
}

/// A client's entry in the debounce map, held while its call sleeps.
///
/// Dropping it (including when the request future is cancelled) clears the
/// entry unless a newer call has replaced it.
struct PendingSlot<'a> {
    latest: &'a DashMap<String, u64>,
    client: &'a str,
    ticket: u64,
}

impl PendingSlot<'_> {
    /// `true` if this call is still the client's latest
    fn release(self) -> bool {
        self.clear()
    }

    fn clear(&self) -> bool {
        let ticket = self.ticket;
        self.latest
            .remove_if(self.client, |_, latest| *latest == ticket)
            .is_some()
    }
}

impl Drop for PendingSlot<'_> {
    fn drop(&mut self) {
        self.clear();
    }
}
