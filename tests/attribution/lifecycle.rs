//! Engine Lifecycle Tests
//!
//! Startup wiring, config files, and shutdown behaviour.

use crate::*;
use std::io::Write;

#[test]
fn test_start_without_audit_fails_and_activates_nothing() {
    init_tracing();
    let err = Causeway::builder()
        .broadcaster(Arc::new(MemoryBroadcaster::new()))
        .start()
        .unwrap_err();
    assert!(matches!(err, Error::MissingCollaborator(_)));
    assert!(err.is_startup_failure());
}

#[test]
fn test_config_file_is_applied() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[fire]
disable-unknown = false

[cache]
location-capacity = 16
"#
    )
    .unwrap();

    let audit = Arc::new(MemoryAuditLog::new());
    let engine = Causeway::builder()
        .config_file(file.path())
        .unwrap()
        .audit(audit)
        .start()
        .unwrap();

    assert!(!engine.config().fire.disable_unknown);
    assert_eq!(engine.config().cache.location_capacity, 16);

    let world = WorldId::new();
    let verdict = engine.handle(&WorldEvent::BlockIgnite {
        block: Block::new(SpatialKey::new(world, 0, 0, 0), Material::new("grass_block")),
        igniting_entity: None,
        igniting_block: None,
    });
    assert_eq!(verdict, Verdict::Proceed);
}

#[test]
fn test_bad_config_file_is_a_startup_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[fire]\nunknown-option = true").unwrap();
    let err = Causeway::builder().config_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let dir = tempfile::tempdir().unwrap();
    let err = Causeway::builder()
        .config_file(dir.path().join("missing.toml"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_shutdown_clears_store_and_disarms_rules() {
    let w = TestWorld::new();
    w.handle(WorldEvent::BlockPlace {
        player: w.player("Alice"),
        block: w.block(0, 64, 0, "tnt"),
    });
    assert_eq!(w.engine.store().location_count(), 1);

    w.engine.shutdown().unwrap();
    assert_eq!(w.engine.store().location_count(), 0);

    // An unknown explosion would be suppressed while running
    let verdict = w.handle(WorldEvent::EntityExplode {
        entity: w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0),
        blocks: w.row(0, 63, 0, 2),
    });
    assert_eq!(verdict, Verdict::Proceed);
    assert!(w.alerts.is_empty());

    assert!(matches!(w.engine.shutdown(), Err(Error::AlreadyStopped)));
}

#[test]
fn test_default_broadcaster_is_used_when_none_given() {
    init_tracing();
    let engine = Causeway::builder()
        .audit(Arc::new(MemoryAuditLog::new()))
        .start()
        .unwrap();
    let world = WorldId::new();
    let verdict = engine.handle(&WorldEvent::BlockExplode {
        origin: Block::new(SpatialKey::new(world, 0, 0, 0), Material::new("red_bed")),
        blocks: vec![Block::new(SpatialKey::new(world, 1, 0, 0), Material::new("stone"))],
    });
    assert_eq!(verdict, Verdict::ClearBlocks { remove_entity: false });
}
