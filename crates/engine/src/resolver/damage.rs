//! Entity-damaged-by-entity rules
//!
//! Sub-rules run in host priority order: end-crystal and projectile tagging
//! first (they only write tags), then the item-frame and painting rules,
//! which may audit or suppress the hit.

use super::Resolver;
use crate::config::Category;
use crate::event::Verdict;
use causeway_core::{AttributionTag, Entity, EntityKind};

pub(super) fn on_entity_damage(resolver: &Resolver, entity: &Entity, damager: &Entity) -> Verdict {
    if entity.kind == EntityKind::EndCrystal {
        crystal_hit(resolver, entity, damager);
    }
    if damager.is_projectile() {
        projectile_hit(resolver, entity, damager);
    }

    if entity.kind.is_item_frame() {
        item_frame_hit(resolver, entity, damager)
    } else if entity.kind == EntityKind::Painting {
        painting_hit(resolver, entity, damager)
    } else {
        Verdict::Proceed
    }
}

/// Whoever hits a crystal owns its detonation
fn crystal_hit(resolver: &Resolver, crystal: &Entity, damager: &Entity) {
    let tag = if damager.is_player() {
        Some(AttributionTag::direct(damager.name.as_str()))
    } else {
        resolver.store.lookup_entity(&damager.id).or_else(|| {
            damager
                .player_shooter()
                .map(|shooter| AttributionTag::direct(shooter.name.as_str()))
        })
    };
    if let Some(tag) = tag {
        resolver.store.record_entity(crystal.id, &tag);
    }
}

fn projectile_hit(resolver: &Resolver, entity: &Entity, projectile: &Entity) {
    let tag = match projectile.player_shooter() {
        Some(shooter) => Some(AttributionTag::direct(shooter.name.as_str())),
        None => resolver.store.lookup_entity(&projectile.id),
    };
    if let Some(tag) = tag {
        resolver.store.record_entity(entity.id, &tag);
    }
}

fn item_frame_hit(resolver: &Resolver, frame: &Entity, damager: &Entity) -> Verdict {
    if !resolver.enabled(Category::ItemFrame) || frame.invulnerable {
        return Verdict::Proceed;
    }
    let Some(item) = frame.item.as_ref().filter(|item| !item.is_air()) else {
        return Verdict::Proceed;
    };
    let Some(pos) = frame.location.block_key() else {
        return Verdict::Proceed;
    };

    if damager.is_player() {
        let tag = AttributionTag::direct(damager.name.as_str());
        resolver.store.record_entity(frame.id, &tag);
        resolver.audit.log_interaction(&tag, pos);
        resolver.audit.log_removal(&tag, pos, item, None);
        return Verdict::Proceed;
    }

    match resolver.store.lookup_entity(&damager.id) {
        Some(cause) => {
            let tag = cause.relay(damager.name.as_str());
            resolver.store.record_entity(frame.id, &tag);
            resolver.audit.log_removal(&tag, pos, item, None);
            Verdict::Proceed
        }
        None => resolver.unknown_cause(Category::ItemFrame, &frame.location, Verdict::Cancel),
    }
}

fn painting_hit(resolver: &Resolver, painting: &Entity, damager: &Entity) -> Verdict {
    if !resolver.enabled(Category::Painting) || painting.invulnerable {
        return Verdict::Proceed;
    }
    let Some(pos) = painting.location.block_key() else {
        return Verdict::Proceed;
    };

    if damager.is_player() {
        resolver
            .audit
            .log_interaction(&AttributionTag::direct(damager.name.as_str()), pos);
        return Verdict::Proceed;
    }

    match resolver.store.lookup_entity(&damager.id) {
        Some(cause) => {
            resolver
                .audit
                .log_interaction(&cause.relay(damager.name.as_str()), pos);
            Verdict::Proceed
        }
        None => resolver.unknown_cause(Category::Painting, &painting.location, Verdict::Cancel),
    }
}
