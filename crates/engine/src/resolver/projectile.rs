//! Projectile launch and bomb-hit rules

use super::Resolver;
use crate::event::Verdict;
use causeway_core::{AttributionTag, Entity, EntityKind, ProjectileSource};

/// Tag a new projectile (and its shooter) with whoever it is fighting for
///
/// A mob with a combat target fires "because of" that target, so the target
/// becomes the root actor. Player shots are observed; everything else is
/// inferred.
pub(super) fn on_projectile_launch(resolver: &Resolver, projectile: &Entity) -> Verdict {
    let Some(source) = projectile.shooter.as_deref() else {
        return Verdict::Proceed;
    };
    let name = projectile.name.as_str();

    let tag = match source {
        ProjectileSource::Entity(shooter) => {
            let root = shooter.target.as_deref().unwrap_or(&shooter.name);
            let tag = if shooter.is_player() {
                AttributionTag::direct(root).observed_through(name)
            } else {
                AttributionTag::direct(root).relay(name)
            };
            resolver.store.record_entity(shooter.id, &tag);
            tag
        }
        ProjectileSource::Block(block) => {
            let tag = AttributionTag::direct(block.material.name()).relay(name);
            resolver.store.record_location(block.pos, &tag);
            tag
        }
        ProjectileSource::Other(kind) => AttributionTag::direct(kind.as_str()).relay(name),
    };

    resolver.store.record_entity(projectile.id, &tag);
    Verdict::Proceed
}

/// A player's shot primes a minecart or crystal on impact
pub(super) fn on_projectile_hit(resolver: &Resolver, projectile: &Entity, hit: Option<&Entity>) -> Verdict {
    let Some(hit) = hit else {
        return Verdict::Proceed;
    };
    if !matches!(hit.kind, EntityKind::TntMinecart | EntityKind::EndCrystal) {
        return Verdict::Proceed;
    }
    let Some(shooter) = projectile.player_shooter() else {
        return Verdict::Proceed;
    };

    let tag = resolver
        .store
        .lookup_entity(&projectile.id)
        .unwrap_or_else(|| AttributionTag::direct(shooter.name.as_str()));
    resolver.store.record_entity(hit.id, &tag);
    Verdict::Proceed
}
