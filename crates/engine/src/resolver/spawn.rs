//! Primed explosive spawn

use super::Resolver;
use crate::event::Verdict;
use causeway_core::{AttributionTag, Entity, EntityKind, SpatialKey};

/// Primed explosives sit on half-block coordinates; shifting back by half a
/// block lands on the cell the explosive block occupied.
pub(super) fn explosive_cell_key(entity: &Entity) -> Option<SpatialKey> {
    entity.location.offset(-0.5, 0.0, -0.5).block_key()
}

pub(super) fn on_entity_spawn(resolver: &Resolver, entity: &Entity, source: Option<&Entity>) -> Verdict {
    if entity.kind != EntityKind::Tnt {
        return Verdict::Proceed;
    }

    let tag = source
        .and_then(|source| {
            if source.is_player() {
                Some(AttributionTag::direct(source.name.as_str()))
            } else {
                resolver.store.lookup_entity(&source.id)
            }
        })
        .or_else(|| {
            explosive_cell_key(entity).and_then(|pos| resolver.store.lookup_location(&pos))
        });

    if let Some(tag) = tag {
        resolver.store.record_entity(entity.id, &tag);
    }
    Verdict::Proceed
}
