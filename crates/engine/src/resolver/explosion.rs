//! Explosion rules
//!
//! | Exploder | Resolution order | Logged as | Propagates | Spent |
//! |----------|------------------|-----------|------------|-------|
//! | block (bed, anchor) | origin cell | inherited | yes | - |
//! | tnt, end crystal | entity | `#<kind>-t` | yes | yes |
//! | creeper | entity, target | inherited, `#creeper-<target>` | target only | - |
//! | fireball family | entity | `#fireball-t` | yes | yes |
//! | tnt minecart | offset cell, entity | `#tntminecart-t` | yes | entity only |
//! | anything else | entity, target, last damager | as resolved | no | - |
//!
//! Propagating writes the tag onto every destroyed cell so that explosives
//! primed by this blast inherit it.

use super::spawn::explosive_cell_key;
use super::Resolver;
use crate::config::Category;
use crate::event::Verdict;
use causeway_core::{AttributionTag, Block, Entity, EntityKind};
use tracing::debug;

pub(super) fn on_block_explode(resolver: &Resolver, origin: &Block, blocks: &[Block]) -> Verdict {
    if !resolver.enabled(Category::BlockExplosion) {
        return Verdict::Proceed;
    }

    match resolver.store.lookup_location(&origin.pos) {
        Some(tag) => {
            resolver.log_removals(&tag, blocks, true);
            Verdict::Proceed
        }
        None => resolver.unknown_cause(
            Category::BlockExplosion,
            &origin.pos.center(),
            Verdict::ClearBlocks {
                remove_entity: false,
            },
        ),
    }
}

pub(super) fn on_entity_explode(resolver: &Resolver, entity: &Entity, blocks: &[Block]) -> Verdict {
    if blocks.is_empty() || !resolver.enabled(Category::EntityExplosion) {
        return Verdict::Proceed;
    }
    debug!(kind = %entity.kind, blocks = blocks.len(), "entity explosion");

    let own = resolver.store.lookup_entity(&entity.id);
    match &entity.kind {
        EntityKind::Tnt | EntityKind::EndCrystal => {
            spent_explosive(resolver, entity, blocks, own, entity.kind.key())
        }
        kind if kind.is_fireball() => spent_explosive(resolver, entity, blocks, own, "fireball"),
        EntityKind::Creeper => creeper(resolver, entity, blocks, own),
        EntityKind::TntMinecart => tnt_minecart(resolver, entity, blocks, own),
        _ => other(resolver, entity, blocks, own),
    }
}

/// Single-use explosives: the tag moves onto the blast and the entity is spent
fn spent_explosive(
    resolver: &Resolver,
    entity: &Entity,
    blocks: &[Block],
    own: Option<AttributionTag>,
    mechanism: &str,
) -> Verdict {
    match own {
        Some(tag) => {
            resolver.log_removals(&tag.relay(mechanism), blocks, true);
            resolver.store.invalidate_entity(&entity.id);
            Verdict::Proceed
        }
        None => suppress(resolver, entity, true),
    }
}

fn creeper(resolver: &Resolver, entity: &Entity, blocks: &[Block], own: Option<AttributionTag>) -> Verdict {
    if let Some(tag) = own {
        resolver.log_removals(&tag, blocks, false);
        return Verdict::Proceed;
    }
    match entity.target.as_deref() {
        Some(target) => {
            let tag = AttributionTag::direct(target).relay("creeper");
            resolver.log_removals(&tag, blocks, true);
            Verdict::Proceed
        }
        None => suppress(resolver, entity, true),
    }
}

/// The cart's cell outranks its own tag: whoever rigged the spot set it off
fn tnt_minecart(
    resolver: &Resolver,
    entity: &Entity,
    blocks: &[Block],
    own: Option<AttributionTag>,
) -> Verdict {
    let from_cell = explosive_cell_key(entity).and_then(|pos| resolver.store.lookup_location(&pos));
    if let Some(tag) = from_cell {
        resolver.log_removals(&tag.relay("tntminecart"), blocks, true);
        return Verdict::Proceed;
    }
    match own {
        Some(tag) => {
            resolver.log_removals(&tag.relay("tntminecart"), blocks, true);
            resolver.store.invalidate_entity(&entity.id);
            Verdict::Proceed
        }
        None => suppress(resolver, entity, false),
    }
}

fn other(resolver: &Resolver, entity: &Entity, blocks: &[Block], own: Option<AttributionTag>) -> Verdict {
    let tag = own
        .filter(|tag| !tag.is_empty())
        .or_else(|| entity.target.as_deref().map(AttributionTag::inferred))
        .filter(|tag| !tag.is_empty())
        .or_else(|| {
            entity
                .last_damager
                .as_deref()
                .map(|damager| AttributionTag::direct(damager).relay(entity.kind.key()))
        })
        .filter(|tag| !tag.is_empty());

    match tag {
        Some(tag) => {
            resolver.log_removals(&tag, blocks, false);
            Verdict::Proceed
        }
        None => suppress(resolver, entity, true),
    }
}

fn suppress(resolver: &Resolver, entity: &Entity, remove_entity: bool) -> Verdict {
    resolver.unknown_cause(
        Category::EntityExplosion,
        &entity.location,
        Verdict::ClearBlocks { remove_entity },
    )
}
