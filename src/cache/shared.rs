use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use crate::resolve::Resolve;
use super::{Cache, Event, RawConnection, Stats};

/// A `Cache` for callers that observe from more than one thread. Both
/// maps sit behind the same lock so eviction and insertion stay atomic.
pub struct Shared<R> {
    cache: Mutex<Cache<R>>,
}

impl<R: Resolve> Shared<R> {
    pub fn new(cache: Cache<R>) -> Self {
        Self {
            cache: Mutex::new(cache),
        }
    }

    pub fn observe(&self, raw: &[RawConnection], now: DateTime<Utc>) -> Vec<Event> {
        self.cache.lock().observe(raw, now)
    }

    pub fn reset(&self) {
        self.cache.lock().reset()
    }

    pub fn stats(&self) -> Stats {
        self.cache.lock().stats()
    }
}

impl<R: Resolve> From<Cache<R>> for Shared<R> {
    fn from(cache: Cache<R>) -> Self {
        Self::new(cache)
    }
}
