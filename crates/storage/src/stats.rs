//! Cache statistics

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of a cache's counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing (including expired entries)
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
    /// Entries dropped for idling past the TTL
    pub expirations: u64,
}

impl CacheStats {
    /// Total lookups
    pub fn request_count(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit; 1.0 when nothing was requested
    pub fn hit_rate(&self) -> f64 {
        let requests = self.request_count();
        if requests == 0 {
            1.0
        } else {
            self.hits as f64 / requests as f64
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct StatsCounter {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    expirations: AtomicU64,
}

impl StatsCounter {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_evictions(&self, count: u64) {
        if count > 0 {
            self.evictions.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_expirations(&self, count: u64) {
        if count > 0 {
            self.expirations.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
        }
    }
}
