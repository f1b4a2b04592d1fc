//! # Causeway
//!
//! Causal attribution for indirect world changes.
//!
//! Causeway answers "who is responsible?" for changes no player made by hand:
//! a block destroyed by TNT a player lit, fire spreading from a block a player
//! ignited, a decoration broken by an arrow a skeleton fired while fighting a
//! player. It keeps two bounded, expiring maps of attribution tags (block
//! cells and live entities) and applies one rule per world event to carry
//! responsibility from cause to effect.
//!
//! ## Quick Start
//!
//! ```
//! use causeway::prelude::*;
//! use std::sync::Arc;
//!
//! let audit = Arc::new(MemoryAuditLog::new());
//! let engine = Causeway::builder().audit(audit.clone()).start()?;
//!
//! let world = WorldId::new();
//! let at = Location::new(world, 0.5, 64.0, 0.5);
//! let alice = Entity::player(EntityId::new(1), "Alice", at);
//! let tnt = Entity::new(EntityId::new(2), EntityKind::Tnt, "Primed TNT", at);
//!
//! // Alice lights TNT, then it goes off.
//! engine.handle(&WorldEvent::EntitySpawn { entity: tnt.clone(), source: Some(alice) });
//! engine.handle(&WorldEvent::EntityExplode {
//!     entity: tnt,
//!     blocks: vec![Block::new(SpatialKey::new(world, 0, 63, 0), Material::new("stone"))],
//! });
//!
//! assert_eq!(audit.records()[0].tag, "#tnt-Alice");
//! # Ok::<(), causeway::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `causeway-core`: world model and [`AttributionTag`]
//! - `causeway-storage`: the expiring [`AttributionStore`]
//! - `causeway-engine`: events, rules and collaborators

#![warn(missing_docs)]

mod error;
mod service;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use service::{Causeway, CausewayBuilder};

// Re-export the layers
pub use causeway_core::{AttributionTag, Segment};
pub use causeway_engine::{
    Alert, AuditAction, AuditLog, AuditRecord, Broadcaster, Category, CategoryConfig,
    EngineConfig, InteractAction, LogBroadcaster, MemoryAuditLog, MemoryBroadcaster,
    RemoveCause, Verdict, WorldEvent, ALERT_RADIUS,
};
pub use causeway_storage::{AttributionStore, Clock, ManualClock, StoreConfig, StoreStats, SystemClock};

/// World model types.
pub mod types {
    pub use causeway_core::types::*;
}
