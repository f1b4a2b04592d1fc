//! Convenient imports for Causeway.
//!
//! ```
//! use causeway::prelude::*;
//! ```

// Main entry point
pub use crate::service::{Causeway, CausewayBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Events and collaborators
pub use causeway_engine::{
    AuditLog, Broadcaster, EngineConfig, InteractAction, LogBroadcaster, MemoryAuditLog,
    MemoryBroadcaster, RemoveCause, Verdict, WorldEvent,
};

// World model
pub use causeway_core::{
    AttributionTag, BedPart, Block, BlockState, Direction, Entity, EntityId, EntityKind,
    Location, Material, Player, ProjectileSource, SpatialKey, WorldId,
};
