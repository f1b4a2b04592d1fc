//! Causation resolver
//!
//! One rule per event kind. Every rule has the same shape:
//!
//! ```text
//! candidate sources (fixed priority, first match wins)
//!         │
//!   ┌─────┴──────┐
//!   │ resolved?  │
//!   └──┬──────┬──┘
//!  yes │      │ no
//!      ▼      ▼
//!  forward to audit,     unknown-cause policy:
//!  write tags back       suppress + alert, or proceed
//!  into the store        unattributed
//! ```
//!
//! Rules run synchronously inside [`Resolver::handle`]; a tag written by an
//! upstream event is visible to every later event.

mod damage;
mod explosion;
mod fire;
mod hanging;
mod interact;
mod projectile;
mod spawn;

use crate::audit::AuditLog;
use crate::config::{Category, EngineConfig};
use crate::event::{Verdict, WorldEvent};
use crate::notify::{Broadcaster, ALERT_RADIUS};
use causeway_core::{AttributionTag, Block, Location};
use causeway_storage::AttributionStore;
use std::sync::Arc;
use tracing::debug;

/// Applies the attribution rules to world events
pub struct Resolver {
    store: Arc<AttributionStore>,
    audit: Arc<dyn AuditLog>,
    broadcaster: Arc<dyn Broadcaster>,
    config: EngineConfig,
}

impl Resolver {
    /// Create a resolver over a shared store
    pub fn new(
        store: Arc<AttributionStore>,
        audit: Arc<dyn AuditLog>,
        broadcaster: Arc<dyn Broadcaster>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            audit,
            broadcaster,
            config,
        }
    }

    pub fn store(&self) -> &AttributionStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve one event and tell the host what to do with it
    pub fn handle(&self, event: &WorldEvent) -> Verdict {
        match event {
            WorldEvent::InteractBlock {
                player,
                action,
                block,
            } => interact::on_interact_block(self, player, *action, block.as_ref()),
            WorldEvent::InteractEntity { player, target } => {
                interact::on_interact_entity(self, player, target)
            }
            WorldEvent::BlockPlace { player, block } | WorldEvent::BlockBreak { player, block } => {
                interact::on_block_changed_by_player(self, player, block)
            }
            WorldEvent::BlockExplode { origin, blocks } => {
                explosion::on_block_explode(self, origin, blocks)
            }
            WorldEvent::EntityExplode { entity, blocks } => {
                explosion::on_entity_explode(self, entity, blocks)
            }
            WorldEvent::EntitySpawn { entity, source } => {
                spawn::on_entity_spawn(self, entity, source.as_ref())
            }
            WorldEvent::EntityDamageByEntity { entity, damager } => {
                damage::on_entity_damage(self, entity, damager)
            }
            WorldEvent::ProjectileLaunch { projectile } => {
                projectile::on_projectile_launch(self, projectile)
            }
            WorldEvent::ProjectileHit { projectile, hit } => {
                projectile::on_projectile_hit(self, projectile, hit.as_ref())
            }
            WorldEvent::HangingBreak { entity, cause } => {
                hanging::on_hanging_break(self, entity, *cause)
            }
            WorldEvent::BlockIgnite {
                block,
                igniting_entity,
                igniting_block,
            } => fire::on_block_ignite(self, block, igniting_entity.as_ref(), igniting_block.as_ref()),
            WorldEvent::BlockBurn {
                block,
                igniting_block,
            } => fire::on_block_burn(self, block, igniting_block.as_ref()),
        }
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    fn enabled(&self, category: Category) -> bool {
        self.config.category(category).enable
    }

    /// Apply the unknown-cause policy of `category`
    ///
    /// With `disable-unknown` on, alerts nearby players and returns
    /// `suppressed`; otherwise the event proceeds unattributed.
    fn unknown_cause(&self, category: Category, origin: &Location, suppressed: Verdict) -> Verdict {
        let section = self.config.category(category);
        if !section.disable_unknown {
            debug!(%category, "unresolved cause, proceeding unattributed");
            return Verdict::Proceed;
        }

        debug!(%category, verdict = ?suppressed, "unresolved cause, suppressing");
        let message = section.alert_message(category);
        if !message.is_empty() {
            self.broadcaster.broadcast_near(origin, ALERT_RADIUS, message);
        }
        suppressed
    }

    /// Forward a removal per block, optionally tagging each cell for chains
    fn log_removals(&self, tag: &AttributionTag, blocks: &[Block], propagate: bool) {
        for block in blocks {
            self.audit
                .log_removal(tag, block.pos, &block.material, Some(&block.state));
            if propagate {
                self.store.record_location(block.pos, tag);
            }
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}
