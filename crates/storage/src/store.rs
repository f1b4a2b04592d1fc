//! The attribution store
//!
//! Two independent caches:
//!
//! | Map | Key | Default capacity | Expiry |
//! |-----|-----|------------------|--------|
//! | locations | [`SpatialKey`] | 200,000 | 1 hour since last access |
//! | entities | [`EntityId`] | 50,000 | 1 hour since last access |
//!
//! Nothing relates the two maps except the resolver rules that read and
//! write them. All operations are total: empty tags are ignored, misses are
//! `None`, and eviction never surfaces as an error.

use crate::cache::{CacheSettings, ExpiringCache};
use crate::clock::{Clock, SystemClock};
use crate::stats::CacheStats;
use causeway_core::{AttributionTag, EntityId, SpatialKey};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Sizing of the attribution store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Maximum tagged block cells (default: 200000)
    pub location_capacity: usize,

    /// Maximum tagged entities (default: 50000)
    pub entity_capacity: usize,

    /// Idle seconds before an entry expires (default: 3600)
    pub expire_after_access_secs: u64,

    /// Lock segments per map (default: 4)
    pub concurrency: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            location_capacity: 200_000,
            entity_capacity: 50_000,
            expire_after_access_secs: 3600,
            concurrency: 4,
        }
    }
}

impl StoreConfig {
    fn settings(&self, capacity: usize) -> CacheSettings {
        CacheSettings::new(capacity, Duration::from_secs(self.expire_after_access_secs))
            .with_concurrency(self.concurrency)
    }
}

/// Counters for both maps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub locations: CacheStats,
    pub entities: CacheStats,
}

/// Process-wide position and entity tag maps
///
/// Constructed once per engine and shared by reference with every rule.
///
/// # Example
///
/// ```
/// use causeway_core::{AttributionTag, SpatialKey, WorldId};
/// use causeway_storage::AttributionStore;
///
/// let store = AttributionStore::new();
/// let pos = SpatialKey::new(WorldId::new(), 0, 64, 0);
///
/// store.record_location(pos, &AttributionTag::direct("Alice").relay("bed"));
/// assert_eq!(
///     store.lookup_location(&pos).map(|t| t.to_string()),
///     Some("#bed-Alice".to_string())
/// );
/// ```
#[derive(Debug)]
pub struct AttributionStore {
    locations: ExpiringCache<SpatialKey, AttributionTag>,
    entities: ExpiringCache<EntityId, AttributionTag>,
}

impl AttributionStore {
    /// Create a store with default sizing on the system clock
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default(), Arc::new(SystemClock))
    }

    /// Create a store with explicit sizing and time source
    pub fn with_config(config: &StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            locations: ExpiringCache::new(config.settings(config.location_capacity), clock.clone()),
            entities: ExpiringCache::new(config.settings(config.entity_capacity), clock),
        }
    }

    // ========================================================================
    // Location map
    // ========================================================================

    /// Upsert the tag of a block cell; no-op for an empty tag
    pub fn record_location(&self, pos: SpatialKey, tag: &AttributionTag) {
        if tag.is_empty() {
            return;
        }
        trace!(%pos, %tag, "record location");
        self.locations.insert(pos, tag.clone());
    }

    /// Current tag of a block cell, refreshing its expiry
    pub fn lookup_location(&self, pos: &SpatialKey) -> Option<AttributionTag> {
        self.locations.get(pos)
    }

    // ========================================================================
    // Entity map
    // ========================================================================

    /// Upsert the tag of an entity; no-op for an empty tag
    pub fn record_entity(&self, entity: EntityId, tag: &AttributionTag) {
        if tag.is_empty() {
            return;
        }
        trace!(%entity, %tag, "record entity");
        self.entities.insert(entity, tag.clone());
    }

    /// Current tag of an entity, refreshing its expiry
    pub fn lookup_entity(&self, entity: &EntityId) -> Option<AttributionTag> {
        self.entities.get(entity)
    }

    /// Forget a spent entity so its tag is never reused
    pub fn invalidate_entity(&self, entity: &EntityId) {
        if self.entities.remove(entity).is_some() {
            trace!(%entity, "invalidate entity");
        }
    }

    // ========================================================================
    // Lifecycle / introspection
    // ========================================================================

    /// Drop all entries in both maps
    pub fn clear(&self) {
        self.locations.clear();
        self.entities.clear();
    }

    /// Purge idle entries from both maps; returns how many were dropped
    pub fn purge_expired(&self) -> u64 {
        self.locations.purge_expired() + self.entities.purge_expired()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            locations: self.locations.stats(),
            entities: self.entities.stats(),
        }
    }
}

impl Default for AttributionStore {
    fn default() -> Self {
        Self::new()
    }
}
