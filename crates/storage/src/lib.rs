//! Storage layer for causeway
//!
//! This crate implements the attribution store:
//! - ExpiringCache: segmented, bounded map with access-based expiry
//! - AttributionStore: the location map and the entity map
//! - Clock: injectable time source (SystemClock, ManualClock)
//! - CacheStats: hit/miss/eviction counters

#![warn(clippy::all)]

pub mod cache;
pub mod clock;
pub mod stats;
pub mod store;

pub use cache::{CacheSettings, ExpiringCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use stats::CacheStats;
pub use store::{AttributionStore, StoreConfig, StoreStats};
