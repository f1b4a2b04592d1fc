//! Segmented, bounded, access-expiring cache
//!
//! Backs both halves of the attribution store.
//!
//! # Design
//!
//! - Segments: fixed count (the concurrency level), each behind its own
//!   `parking_lot::Mutex`, so writers to different segments never contend
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Access order: a per-segment `BTreeMap<tick, key>`; the first entry is the
//!   least recently accessed one
//!
//! # Eviction
//!
//! - Capacity: split exactly across segments; inserting into a full segment
//!   drops its least recently accessed entries
//! - Age: an entry idle for at least the TTL reads as absent and is purged the
//!   next time its segment is touched
//!
//! Evicted and never-written keys are indistinguishable to callers.

use crate::clock::Clock;
use crate::stats::{CacheStats, StatsCounter};
use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHasher};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Sizing and expiry settings for one cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// Maximum number of live entries
    pub max_capacity: usize,
    /// Idle time after which an entry expires
    pub expire_after_access: Duration,
    /// Number of independently locked segments
    pub concurrency: usize,
}

impl CacheSettings {
    /// Create settings with the default concurrency level of 4
    pub fn new(max_capacity: usize, expire_after_access: Duration) -> Self {
        Self {
            max_capacity,
            expire_after_access,
            concurrency: 4,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

#[derive(Debug)]
struct Slot<V> {
    value: V,
    tick: u64,
    last_access: Instant,
}

enum Access<V> {
    Hit(V),
    Miss,
    Expired,
}

/// One locked partition of the cache
#[derive(Debug)]
struct Segment<K, V> {
    entries: FxHashMap<K, Slot<V>>,
    /// Access tick -> key, oldest first
    order: BTreeMap<u64, K>,
    next_tick: u64,
    capacity: usize,
}

fn is_expired(last_access: Instant, now: Instant, ttl: Duration) -> bool {
    now.saturating_duration_since(last_access) >= ttl
}

impl<K: Eq + Hash + Clone, V: Clone> Segment<K, V> {
    fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: BTreeMap::new(),
            next_tick: 0,
            capacity,
        }
    }

    fn bump(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    fn access(&mut self, key: &K, now: Instant, ttl: Duration) -> Access<V> {
        let tick = self.next_tick;
        match self.entries.get_mut(key) {
            None => return Access::Miss,
            Some(slot) if !is_expired(slot.last_access, now, ttl) => {
                let previous = std::mem::replace(&mut slot.tick, tick);
                slot.last_access = now;
                let value = slot.value.clone();
                self.order.remove(&previous);
                self.order.insert(tick, key.clone());
                self.next_tick += 1;
                return Access::Hit(value);
            }
            Some(_) => {}
        }
        self.remove(key);
        Access::Expired
    }

    /// Insert or overwrite; returns the number of capacity evictions
    fn insert(&mut self, key: K, value: V, now: Instant) -> u64 {
        let tick = self.bump();
        if let Some(slot) = self.entries.get_mut(&key) {
            let previous = std::mem::replace(&mut slot.tick, tick);
            slot.value = value;
            slot.last_access = now;
            self.order.remove(&previous);
            self.order.insert(tick, key);
            return 0;
        }

        let mut evicted = 0;
        while self.entries.len() >= self.capacity {
            match self.order.pop_first() {
                Some((_, oldest)) => {
                    self.entries.remove(&oldest);
                    evicted += 1;
                }
                None => break,
            }
        }
        self.order.insert(tick, key.clone());
        self.entries.insert(
            key,
            Slot {
                value,
                tick,
                last_access: now,
            },
        );
        evicted
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.entries.remove(key)?;
        self.order.remove(&slot.tick);
        Some(slot.value)
    }

    /// Drop idle entries from the old end of the access order
    fn purge_expired(&mut self, now: Instant, ttl: Duration) -> u64 {
        let mut purged = 0;
        while let Some((_, key)) = self.order.first_key_value() {
            let expired = self
                .entries
                .get(key)
                .map_or(true, |slot| is_expired(slot.last_access, now, ttl));
            if !expired {
                break;
            }
            if let Some((_, key)) = self.order.pop_first() {
                self.entries.remove(&key);
            }
            purged += 1;
        }
        purged
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// Bounded key -> value cache with access-based expiry
///
/// # Thread Safety
///
/// All operations are thread-safe and take `&self`:
/// - get(): locks only the key's segment; refreshes recency on hit
/// - insert(): locks only the key's segment; may evict within it
/// - Different segments never contend
///
/// # Example
///
/// ```
/// use causeway_storage::{CacheSettings, ExpiringCache, SystemClock};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let cache = ExpiringCache::new(
///     CacheSettings::new(1_000, Duration::from_secs(3600)),
///     Arc::new(SystemClock),
/// );
/// cache.insert("pos", "#bed-Alice".to_string());
/// assert_eq!(cache.get(&"pos").as_deref(), Some("#bed-Alice"));
/// ```
pub struct ExpiringCache<K, V> {
    segments: Box<[Mutex<Segment<K, V>>]>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    stats: StatsCounter,
}

impl<K: Eq + Hash + Clone, V: Clone> ExpiringCache<K, V> {
    /// Create an empty cache
    ///
    /// The segment count is clamped so every segment holds at least one
    /// entry; a zero capacity yields a cache that stores nothing.
    pub fn new(settings: CacheSettings, clock: Arc<dyn Clock>) -> Self {
        let count = settings
            .concurrency
            .clamp(1, settings.max_capacity.max(1));
        let base = settings.max_capacity / count;
        let remainder = settings.max_capacity % count;
        let segments = (0..count)
            .map(|i| Mutex::new(Segment::new(base + usize::from(i < remainder))))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            segments,
            ttl: settings.expire_after_access,
            clock,
            stats: StatsCounter::default(),
        }
    }

    #[inline]
    fn segment_for(&self, key: &K) -> &Mutex<Segment<K, V>> {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        let index = (hasher.finish() as usize) % self.segments.len();
        &self.segments[index]
    }

    // ========================================================================
    // Get/Insert/Remove
    // ========================================================================

    /// Look up a key, refreshing its access time on hit
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let outcome = self.segment_for(key).lock().access(key, now, self.ttl);
        match outcome {
            Access::Hit(value) => {
                self.stats.record_hit();
                Some(value)
            }
            Access::Expired => {
                self.stats.record_expirations(1);
                self.stats.record_miss();
                None
            }
            Access::Miss => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or overwrite a value (last write wins)
    ///
    /// Purges idle entries of the segment first, then evicts the least
    /// recently accessed ones if the segment is still full.
    pub fn insert(&self, key: K, value: V) {
        let now = self.clock.now();
        let (expired, evicted) = {
            let mut segment = self.segment_for(&key).lock();
            if segment.capacity == 0 {
                return;
            }
            let expired = segment.purge_expired(now, self.ttl);
            let evicted = segment.insert(key, value, now);
            (expired, evicted)
        };
        if evicted > 0 {
            trace!(evicted, expired, "segment full, evicted least recently accessed");
        }
        self.stats.record_expirations(expired);
        self.stats.record_evictions(evicted);
    }

    /// Remove a key, returning its value if it was live
    pub fn remove(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut segment = self.segment_for(key).lock();
        let live = segment
            .entries
            .get(key)
            .map_or(false, |slot| !is_expired(slot.last_access, now, self.ttl));
        let value = segment.remove(key);
        if live {
            value
        } else {
            None
        }
    }

    /// Check for a live entry without refreshing it
    pub fn contains(&self, key: &K) -> bool {
        let now = self.clock.now();
        self.segment_for(key)
            .lock()
            .entries
            .get(key)
            .map_or(false, |slot| !is_expired(slot.last_access, now, self.ttl))
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Purge every idle entry now instead of lazily
    pub fn purge_expired(&self) -> u64 {
        let now = self.clock.now();
        let purged: u64 = self
            .segments
            .iter()
            .map(|segment| segment.lock().purge_expired(now, self.ttl))
            .sum();
        debug!(purged, "purged idle entries");
        self.stats.record_expirations(purged);
        purged
    }

    /// Drop everything
    pub fn clear(&self) {
        for segment in self.segments.iter() {
            segment.lock().clear();
        }
    }

    /// Number of stored entries, including idle ones not yet purged
    pub fn len(&self) -> usize {
        self.segments.iter().map(|segment| segment.lock().entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total capacity across all segments
    pub fn capacity(&self) -> usize {
        self.segments.iter().map(|segment| segment.lock().capacity).sum()
    }

    /// Number of segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Snapshot of hit/miss/eviction counters
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}

impl<K, V> std::fmt::Debug for ExpiringCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("segments", &self.segments.len())
            .field("ttl", &self.ttl)
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
