//! Main entry point for Causeway.
//!
//! This module provides the `Causeway` struct, the running attribution
//! engine, and the builder that wires its collaborators together.

use crate::error::{Error, Result};
use causeway_engine::{
    AuditLog, Broadcaster, EngineConfig, LogBroadcaster, Resolver, Verdict, WorldEvent,
};
use causeway_storage::{AttributionStore, Clock, StoreStats, SystemClock};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

/// The running attribution engine.
///
/// Owns the attribution store for its whole lifetime: the store is built
/// once in [`CausewayBuilder::start`] and cleared by [`Causeway::shutdown`].
/// `Causeway` is `Sync`; hosts that deliver events from several worlds can
/// share it behind an `Arc`.
///
/// # Example
///
/// ```
/// use causeway::prelude::*;
/// use std::sync::Arc;
///
/// let audit = Arc::new(MemoryAuditLog::new());
/// let engine = Causeway::builder().audit(audit.clone()).start()?;
///
/// let world = WorldId::new();
/// let alice = Player::new(EntityId::new(1), "Alice", Location::new(world, 0.5, 64.0, 0.5));
/// let verdict = engine.handle(&WorldEvent::BlockPlace {
///     player: alice,
///     block: Block::new(SpatialKey::new(world, 0, 64, 0), Material::new("tnt")),
/// });
/// assert_eq!(verdict, Verdict::Proceed);
///
/// engine.shutdown()?;
/// # Ok::<(), causeway::Error>(())
/// ```
pub struct Causeway {
    store: Arc<AttributionStore>,
    resolver: Resolver,
    active: AtomicBool,
}

impl Causeway {
    /// Create a builder for engine configuration.
    pub fn builder() -> CausewayBuilder {
        CausewayBuilder::new()
    }

    /// Resolve one event.
    ///
    /// Never fails. Once the engine is stopped every event proceeds
    /// untouched.
    pub fn handle(&self, event: &WorldEvent) -> Verdict {
        if !self.is_active() {
            return Verdict::Proceed;
        }
        let verdict = self.resolver.handle(event);
        if verdict.is_suppressed() {
            debug!(
                event = event.name(),
                location = ?event.location(),
                ?verdict,
                "event suppressed"
            );
        }
        verdict
    }

    /// Stop the engine and drop every stored attribution.
    pub fn shutdown(&self) -> Result<()> {
        if !self.active.swap(false, Ordering::AcqRel) {
            return Err(Error::AlreadyStopped);
        }
        self.store.clear();
        info!("causeway stopped");
        Ok(())
    }

    /// Whether the engine is still handling events.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// The shared attribution store.
    pub fn store(&self) -> &AttributionStore {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        self.resolver.config()
    }

    /// Hit, miss and eviction counters of both maps.
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    /// Drop idle entries now instead of on next access.
    pub fn purge_expired(&self) -> u64 {
        self.store.purge_expired()
    }
}

impl std::fmt::Debug for Causeway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Causeway")
            .field("active", &self.is_active())
            .field("store", &self.store)
            .finish()
    }
}

/// Builder for the engine.
///
/// # Example
///
/// ```no_run
/// use causeway::prelude::*;
/// use std::sync::Arc;
///
/// let engine = Causeway::builder()
///     .config_file("causeway.toml")?
///     .audit(Arc::new(MemoryAuditLog::new()))
///     .broadcaster(Arc::new(LogBroadcaster))
///     .start()?;
/// # Ok::<(), causeway::Error>(())
/// ```
pub struct CausewayBuilder {
    config: EngineConfig,
    audit: Option<Arc<dyn AuditLog>>,
    broadcaster: Option<Arc<dyn Broadcaster>>,
    clock: Option<Arc<dyn Clock>>,
}

impl CausewayBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            audit: None,
            broadcaster: None,
            clock: None,
        }
    }

    /// Use the given configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a TOML file.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.config = EngineConfig::load(path)?;
        Ok(self)
    }

    /// Audit collaborator (required).
    pub fn audit(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Alert delivery. Defaults to [`LogBroadcaster`].
    pub fn broadcaster(mut self, broadcaster: Arc<dyn Broadcaster>) -> Self {
        self.broadcaster = Some(broadcaster);
        self
    }

    /// Time source for entry expiry. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the store and start handling events.
    ///
    /// Fails without activating anything when no audit collaborator was
    /// supplied.
    pub fn start(self) -> Result<Causeway> {
        let Some(audit) = self.audit else {
            error!("no audit log available, causeway will not start");
            return Err(Error::MissingCollaborator("audit log"));
        };
        let broadcaster = self
            .broadcaster
            .unwrap_or_else(|| Arc::new(LogBroadcaster));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let store = Arc::new(AttributionStore::with_config(&self.config.cache, clock));
        info!(
            location_capacity = self.config.cache.location_capacity,
            entity_capacity = self.config.cache.entity_capacity,
            "causeway started"
        );
        let resolver = Resolver::new(store.clone(), audit, broadcaster, self.config);

        Ok(Causeway {
            store,
            resolver,
            active: AtomicBool::new(true),
        })
    }
}

impl std::fmt::Debug for CausewayBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CausewayBuilder")
            .field("config", &self.config)
            .field("audit", &self.audit.is_some())
            .field("broadcaster", &self.broadcaster.is_some())
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for CausewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
