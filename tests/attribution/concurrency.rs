//! Concurrent Delivery Tests
//!
//! Hosts may deliver events from several worlds on different threads. The
//! engine is shared behind an `Arc`; every thread must see its own writes
//! and the store must stay within capacity.

use crate::*;
use std::sync::Barrier;
use std::thread;

const THREADS: usize = 8;
const EVENTS_PER_THREAD: i32 = 500;

#[test]
fn test_parallel_worlds_keep_their_tags() {
    init_tracing();
    let audit = Arc::new(MemoryAuditLog::new());
    let engine = Arc::new(
        Causeway::builder()
            .audit(audit.clone())
            .broadcaster(Arc::new(MemoryBroadcaster::new()))
            .start()
            .unwrap(),
    );
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let world = WorldId::new();
                let name = format!("player{}", t);
                let player = Player::new(
                    EntityId::new(t as u64),
                    name.clone(),
                    Location::new(world, 0.5, 64.0, 0.5),
                );
                barrier.wait();

                for x in 0..EVENTS_PER_THREAD {
                    engine.handle(&WorldEvent::BlockPlace {
                        player: player.clone(),
                        block: Block::new(SpatialKey::new(world, x, 64, 0), Material::new("stone")),
                    });
                }
                for x in 0..EVENTS_PER_THREAD {
                    let tag = engine
                        .store()
                        .lookup_location(&SpatialKey::new(world, x, 64, 0))
                        .map(|tag| tag.to_string());
                    assert_eq!(tag.as_deref(), Some(name.as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(
        engine.store().location_count(),
        THREADS * EVENTS_PER_THREAD as usize
    );
}

#[test]
fn test_capacity_holds_under_contention() {
    let cache = StoreConfig {
        location_capacity: 64,
        entity_capacity: 64,
        expire_after_access_secs: 3600,
        concurrency: 4,
    };
    let w = Arc::new(TestWorld::with_cache(cache));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let w = Arc::clone(&w);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..EVENTS_PER_THREAD {
                    let tnt = w.entity_at(EntityKind::Tnt, "Primed TNT", i, t as i32, 0);
                    w.handle(WorldEvent::EntitySpawn {
                        entity: tnt,
                        source: Some(w.player_entity("Alice")),
                    });
                    w.handle(WorldEvent::BlockPlace {
                        player: w.player("Alice"),
                        block: w.block(i, t as i32, 0, "tnt"),
                    });
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(w.engine.store().location_count() <= 64);
    assert!(w.engine.store().entity_count() <= 64);
    assert!(w.engine.stats().locations.evictions > 0);
}

#[test]
fn test_chained_explosions_across_threads() {
    let w = Arc::new(TestWorld::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let w = Arc::clone(&w);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let z = t as i32 * 10;
                let name = format!("player{}", t);
                let tnt = w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, z);
                barrier.wait();

                w.handle(WorldEvent::EntitySpawn {
                    entity: tnt.clone(),
                    source: Some(w.player_entity(&name)),
                });
                let verdict = w.handle(WorldEvent::EntityExplode {
                    entity: tnt,
                    blocks: w.row(0, 63, z, 4),
                });
                assert_eq!(verdict, Verdict::Proceed);
                (z, name)
            })
        })
        .collect();

    for handle in handles {
        let (z, name) = handle.join().unwrap();
        let expected = format!("#tnt-{}", name);
        assert_eq!(w.location_tag(w.pos(3, 63, z)), Some(expected));
    }
    assert_eq!(w.audit.len(), THREADS * 4);
}
