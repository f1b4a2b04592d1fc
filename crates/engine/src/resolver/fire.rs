//! Fire rules
//!
//! Ignition writes the resolved tag onto the burning cell; burn spreads that
//! tag cell by cell. An unresolved ignition never writes a tag.

use super::Resolver;
use crate::config::Category;
use crate::event::Verdict;
use causeway_core::{AttributionTag, Block, Entity};

pub(super) fn on_block_ignite(
    resolver: &Resolver,
    block: &Block,
    igniting_entity: Option<&Entity>,
    igniting_block: Option<&Block>,
) -> Verdict {
    let from_entity = igniting_entity.and_then(|entity| {
        if entity.is_player() {
            return Some(AttributionTag::direct(entity.name.as_str()));
        }
        resolver.store.lookup_entity(&entity.id).or_else(|| {
            entity
                .player_shooter()
                .map(|shooter| AttributionTag::direct(shooter.name.as_str()))
        })
    });
    let tag = from_entity
        .or_else(|| igniting_block.and_then(|source| resolver.store.lookup_location(&source.pos)));

    if let Some(tag) = tag {
        resolver.store.record_location(block.pos, &tag);
        return Verdict::Proceed;
    }

    if !resolver.enabled(Category::Fire) {
        return Verdict::Proceed;
    }
    resolver.unknown_cause(Category::Fire, &block.pos.center(), Verdict::Cancel)
}

pub(super) fn on_block_burn(resolver: &Resolver, block: &Block, igniting_block: Option<&Block>) -> Verdict {
    if !resolver.enabled(Category::Fire) {
        return Verdict::Proceed;
    }
    let Some(source) = igniting_block else {
        return Verdict::Proceed;
    };

    match resolver.store.lookup_location(&source.pos) {
        Some(inherited) => {
            resolver.store.record_location(block.pos, &inherited);
            resolver.audit.log_removal(
                &inherited.relay("fire"),
                block.pos,
                &block.material,
                Some(&block.state),
            );
            Verdict::Proceed
        }
        None => resolver.unknown_cause(Category::Fire, &source.pos.center(), Verdict::Cancel),
    }
}
