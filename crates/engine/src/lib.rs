//! Causation engine for causeway
//!
//! This crate turns world events into attributions:
//! - WorldEvent / Verdict: the closed event set and the host-facing answer
//! - Resolver: one rule per event kind over a shared AttributionStore
//! - EngineConfig: per-category switches, loaded from TOML
//! - AuditLog / Broadcaster: the write-only collaborators the rules report to

#![warn(clippy::all)]

pub mod audit;
pub mod config;
pub mod error;
pub mod event;
pub mod notify;
pub mod resolver;

pub use audit::{AuditAction, AuditLog, AuditRecord, MemoryAuditLog};
pub use config::{Category, CategoryConfig, EngineConfig};
pub use error::{EngineError, Result};
pub use event::{InteractAction, RemoveCause, Verdict, WorldEvent};
pub use notify::{Alert, Broadcaster, LogBroadcaster, MemoryBroadcaster, ALERT_RADIUS};
pub use resolver::Resolver;
