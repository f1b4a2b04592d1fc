//! Player interaction rules: beds, respawn anchors, creepers, item frames,
//! and plain block placement or breakage.

use super::Resolver;
use crate::config::Category;
use crate::event::{InteractAction, Verdict};
use causeway_core::{AttributionTag, BedPart, Block, BlockState, Entity, EntityKind, Material, Player};

pub(super) fn on_interact_block(
    resolver: &Resolver,
    player: &Player,
    action: InteractAction,
    block: Option<&Block>,
) -> Verdict {
    if action != InteractAction::RightClickBlock {
        return Verdict::Proceed;
    }
    let Some(block) = block else {
        return Verdict::Proceed;
    };

    let actor = AttributionTag::direct(player.name.as_str());
    match block.state {
        BlockState::Bed { facing, part } => {
            // `facing` points from the foot towards the head
            let (head, foot) = match part {
                BedPart::Head => (block.pos, block.pos.relative(facing.opposite())),
                BedPart::Foot => (block.pos.relative(facing), block.pos),
            };
            let tag = actor.relay("bed");
            resolver.store.record_location(head, &tag);
            resolver.store.record_location(foot, &tag);
        }
        BlockState::RespawnAnchor { .. } => {
            resolver
                .store
                .record_location(block.pos, &actor.relay("respawnanchor"));
        }
        BlockState::Generic(_) => {}
    }
    Verdict::Proceed
}

pub(super) fn on_interact_entity(resolver: &Resolver, player: &Player, target: &Entity) -> Verdict {
    let actor = AttributionTag::direct(player.name.as_str());
    match target.kind {
        EntityKind::Creeper => {
            resolver
                .store
                .record_entity(target.id, &actor.relay("ignitecreeper"));
        }
        _ if target.kind.is_item_frame() => {
            on_click_item_frame(resolver, player, target, &actor);
        }
        _ => {}
    }
    Verdict::Proceed
}

/// Adding an item is a placement. Anything else is audited as a rotation
/// (remove + replace of the current item, air for an empty frame)
fn on_click_item_frame(resolver: &Resolver, player: &Player, frame: &Entity, actor: &AttributionTag) {
    if !resolver.enabled(Category::ItemFrame) {
        return;
    }
    let Some(pos) = frame.location.block_key() else {
        return;
    };

    resolver.audit.log_interaction(actor, pos);

    let current = frame.item.clone().unwrap_or_else(Material::air);
    if current.is_air() {
        if let Some(item) = player.item_to_place() {
            resolver
                .audit
                .log_placement(&actor.relay("additem"), pos, item, None);
            return;
        }
    }

    let rotate = actor.relay("rotate");
    resolver.audit.log_removal(&rotate, pos, &current, None);
    resolver.audit.log_placement(&rotate, pos, &current, None);
}

pub(super) fn on_block_changed_by_player(resolver: &Resolver, player: &Player, block: &Block) -> Verdict {
    resolver
        .store
        .record_location(block.pos, &AttributionTag::direct(player.name.as_str()));
    Verdict::Proceed
}
