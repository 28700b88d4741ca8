//! Single-slot public IP cache.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use super::MyIp;

#[derive(Debug, Clone)]
struct CacheSlot {
    data: MyIp,
    timestamp: Instant,
}

/// Holds the most recent public IP lookup, including failed ones.
///
/// The lock is only held to copy the slot in or out, never across a network
/// call. Two lookups that miss at the same time both refresh and the later
/// write wins.
#[derive(Debug)]
pub struct MyIpCache {
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl MyIpCache {
    /// Creates an empty cache whose entries stay valid for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// How long an entry stays valid.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value if it is still fresh.
    pub fn get(&self) -> Option<MyIp> {
        self.get_at(Instant::now())
    }

    /// Returns the cached value if it was stored less than `ttl` before `now`.
    pub fn get_at(&self, now: Instant) -> Option<MyIp> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|entry| now.saturating_duration_since(entry.timestamp) < self.ttl)
            .map(|entry| entry.data.clone())
    }

    /// Overwrites the slot, stamping it with the current time.
    pub fn store(&self, data: MyIp) {
        self.store_at(data, Instant::now());
    }

    /// Overwrites the slot with an explicit timestamp.
    pub fn store_at(&self, data: MyIp, timestamp: Instant) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(CacheSlot { data, timestamp });
    }
}
