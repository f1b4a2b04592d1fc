//! Audit collaborator
//!
//! The resolver forwards every attributed change to an [`AuditLog`]. It never
//! reads back from it. [`MemoryAuditLog`] keeps records in memory for tests
//! and for hosts that drain them in batches.

use causeway_core::{AttributionTag, BlockState, Material, SpatialKey};
use parking_lot::Mutex;

/// Durable record sink for attributed changes
pub trait AuditLog: Send + Sync {
    /// A block (or block-like item) at `pos` was removed
    fn log_removal(
        &self,
        tag: &AttributionTag,
        pos: SpatialKey,
        material: &Material,
        state: Option<&BlockState>,
    );

    /// A block (or block-like item) at `pos` was placed
    fn log_placement(
        &self,
        tag: &AttributionTag,
        pos: SpatialKey,
        material: &Material,
        state: Option<&BlockState>,
    );

    /// Something at `pos` was interacted with
    fn log_interaction(&self, tag: &AttributionTag, pos: SpatialKey);
}

/// Kind of audit record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Removal,
    Placement,
    Interaction,
}

/// One forwarded record, with the tag in its rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub action: AuditAction,
    pub tag: String,
    pub pos: SpatialKey,
    pub material: Option<Material>,
    pub state: Option<BlockState>,
}

/// In-memory [`AuditLog`]
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record so far, oldest first
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }

    /// Records of one action
    pub fn records_of(&self, action: AuditAction) -> Vec<AuditRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.action == action)
            .cloned()
            .collect()
    }

    /// Remove and return every record
    pub fn drain(&self) -> Vec<AuditRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn push(
        &self,
        action: AuditAction,
        tag: &AttributionTag,
        pos: SpatialKey,
        material: Option<&Material>,
        state: Option<&BlockState>,
    ) {
        self.records.lock().push(AuditRecord {
            action,
            tag: tag.to_string(),
            pos,
            material: material.cloned(),
            state: state.cloned(),
        });
    }
}

impl AuditLog for MemoryAuditLog {
    fn log_removal(
        &self,
        tag: &AttributionTag,
        pos: SpatialKey,
        material: &Material,
        state: Option<&BlockState>,
    ) {
        self.push(AuditAction::Removal, tag, pos, Some(material), state);
    }

    fn log_placement(
        &self,
        tag: &AttributionTag,
        pos: SpatialKey,
        material: &Material,
        state: Option<&BlockState>,
    ) {
        self.push(AuditAction::Placement, tag, pos, Some(material), state);
    }

    fn log_interaction(&self, tag: &AttributionTag, pos: SpatialKey) {
        self.push(AuditAction::Interaction, tag, pos, None, None);
    }
}
