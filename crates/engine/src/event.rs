//! World events and verdicts
//!
//! [`WorldEvent`] is the closed set of host events the resolver subscribes
//! to. Each variant carries snapshots of the blocks and entities involved.
//! The resolver answers every event with a [`Verdict`] that the host applies
//! before finalizing the event.

use causeway_core::{Block, Entity, Location, Player};

/// How a player interacted with a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    RightClickBlock,
    LeftClickBlock,
    RightClickAir,
    LeftClickAir,
    Physical,
}

/// Why a hanging decoration was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveCause {
    /// Broken by an entity
    Entity,
    /// Destroyed by an explosion
    Explosion,
    /// A block was placed in its space
    Obstruction,
    /// Its supporting block is gone
    Physics,
    /// Unspecified
    Default,
}

impl RemoveCause {
    /// Upper-case host name, used as the mechanism name in hanging-break tags
    pub fn key(&self) -> &'static str {
        match self {
            RemoveCause::Entity => "ENTITY",
            RemoveCause::Explosion => "EXPLOSION",
            RemoveCause::Obstruction => "OBSTRUCTION",
            RemoveCause::Physics => "PHYSICS",
            RemoveCause::Default => "DEFAULT",
        }
    }

    /// Causes that follow from world updates rather than an actor
    pub fn is_passive(&self) -> bool {
        matches!(self, RemoveCause::Physics | RemoveCause::Default)
    }
}

/// Host events the resolver handles
#[derive(Debug, Clone)]
pub enum WorldEvent {
    /// A player clicked (or stepped on) a block
    InteractBlock {
        player: Player,
        action: InteractAction,
        block: Option<Block>,
    },
    /// A player right-clicked an entity
    InteractEntity { player: Player, target: Entity },
    /// A player placed a block
    BlockPlace { player: Player, block: Block },
    /// A player broke a block
    BlockBreak { player: Player, block: Block },
    /// A block exploded (bed or respawn anchor used in the wrong dimension)
    BlockExplode { origin: Block, blocks: Vec<Block> },
    /// An entity exploded
    EntityExplode { entity: Entity, blocks: Vec<Block> },
    /// An entity appeared; `source` is whatever caused it, if known
    EntitySpawn {
        entity: Entity,
        source: Option<Entity>,
    },
    /// An entity was damaged by another entity
    EntityDamageByEntity { entity: Entity, damager: Entity },
    /// A projectile was launched
    ProjectileLaunch { projectile: Entity },
    /// A projectile hit something
    ProjectileHit {
        projectile: Entity,
        hit: Option<Entity>,
    },
    /// A hanging decoration was removed
    HangingBreak { entity: Entity, cause: RemoveCause },
    /// A block caught fire
    BlockIgnite {
        block: Block,
        igniting_entity: Option<Entity>,
        igniting_block: Option<Block>,
    },
    /// A block burned away
    BlockBurn {
        block: Block,
        igniting_block: Option<Block>,
    },
}

impl WorldEvent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            WorldEvent::InteractBlock { .. } => "interact_block",
            WorldEvent::InteractEntity { .. } => "interact_entity",
            WorldEvent::BlockPlace { .. } => "block_place",
            WorldEvent::BlockBreak { .. } => "block_break",
            WorldEvent::BlockExplode { .. } => "block_explode",
            WorldEvent::EntityExplode { .. } => "entity_explode",
            WorldEvent::EntitySpawn { .. } => "entity_spawn",
            WorldEvent::EntityDamageByEntity { .. } => "entity_damage_by_entity",
            WorldEvent::ProjectileLaunch { .. } => "projectile_launch",
            WorldEvent::ProjectileHit { .. } => "projectile_hit",
            WorldEvent::HangingBreak { .. } => "hanging_break",
            WorldEvent::BlockIgnite { .. } => "block_ignite",
            WorldEvent::BlockBurn { .. } => "block_burn",
        }
    }

    /// Where the event happened, for alerts and logs
    pub fn location(&self) -> Location {
        match self {
            WorldEvent::InteractBlock { player, block, .. } => block
                .as_ref()
                .map_or(player.location, |block| block.pos.center()),
            WorldEvent::InteractEntity { target, .. } => target.location,
            WorldEvent::BlockPlace { block, .. } | WorldEvent::BlockBreak { block, .. } => {
                block.pos.center()
            }
            WorldEvent::BlockExplode { origin, .. } => origin.pos.center(),
            WorldEvent::EntityExplode { entity, .. }
            | WorldEvent::EntitySpawn { entity, .. }
            | WorldEvent::EntityDamageByEntity { entity, .. }
            | WorldEvent::HangingBreak { entity, .. } => entity.location,
            WorldEvent::ProjectileLaunch { projectile } | WorldEvent::ProjectileHit { projectile, .. } => {
                projectile.location
            }
            WorldEvent::BlockIgnite { block, .. } | WorldEvent::BlockBurn { block, .. } => {
                block.pos.center()
            }
        }
    }
}

/// What the host should do with the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Apply the event unchanged
    Proceed,
    /// Cancel the event (no ignition, no burn, no damage)
    Cancel,
    /// Keep the event but destroy no blocks; optionally despawn its entity
    ClearBlocks { remove_entity: bool },
}

impl Verdict {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Verdict::Proceed)
    }

    /// True for any verdict that stops the destructive part of the event
    pub fn is_suppressed(&self) -> bool {
        !self.is_proceed()
    }
}
