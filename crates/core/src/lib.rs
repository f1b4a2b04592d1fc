//! Core types for causeway
//!
//! This crate holds the data model shared by the store and the resolver:
//! - [`types`]: world positions, entity and block snapshots
//! - [`tag`]: the structured [`AttributionTag`]
//! - [`error`]: core error type

#![warn(clippy::all)]

pub mod error;
pub mod tag;
pub mod types;

pub use error::{Error, Result};
pub use tag::{AttributionTag, Segment};
pub use types::{
    BedPart, Block, BlockState, Direction, Entity, EntityId, EntityKind, Location, Material,
    Player, ProjectileSource, SpatialKey, WorldId,
};
