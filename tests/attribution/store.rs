//! Store Behaviour Through The Engine
//!
//! Capacity and idle expiry as the rules see them: an evicted or expired
//! tag must behave exactly like one that was never written.

use crate::*;

fn tiny_cache() -> StoreConfig {
    StoreConfig {
        location_capacity: 2,
        entity_capacity: 2,
        expire_after_access_secs: 60,
        concurrency: 1,
    }
}

/// Place a block as Alice, then prime TNT on that cell and detonate it
fn prime_and_detonate(w: &TestWorld, evict_first: bool) -> Verdict {
    w.handle(WorldEvent::BlockPlace {
        player: w.player("Alice"),
        block: w.block(0, 64, 0, "tnt"),
    });
    if evict_first {
        for x in 1..=2 {
            w.handle(WorldEvent::BlockPlace {
                player: w.player("Bob"),
                block: w.block(x, 64, 0, "stone"),
            });
        }
    }
    let tnt = w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0);
    w.handle(WorldEvent::EntitySpawn {
        entity: tnt.clone(),
        source: None,
    });
    w.handle(WorldEvent::EntityExplode {
        entity: tnt,
        blocks: vec![w.block(0, 63, 0, "dirt")],
    })
}

#[test]
fn test_capacity_eviction_is_transparent() {
    let kept = TestWorld::with_cache(tiny_cache());
    assert_eq!(prime_and_detonate(&kept, false), Verdict::Proceed);
    assert_eq!(kept.removal_tags(), vec!["#tnt-Alice"]);

    let evicted = TestWorld::with_cache(tiny_cache());
    let never_written = TestWorld::with_cache(tiny_cache());
    let tnt = never_written.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0);
    let baseline = never_written.handle(WorldEvent::EntityExplode {
        entity: tnt,
        blocks: vec![never_written.block(0, 63, 0, "dirt")],
    });

    assert_eq!(prime_and_detonate(&evicted, true), baseline);
    assert!(evicted.audit.is_empty());
    assert!(evicted.engine.stats().locations.evictions >= 1);
}

#[test]
fn test_idle_tags_expire() {
    let w = TestWorld::with_cache(tiny_cache());
    w.handle(WorldEvent::BlockPlace {
        player: w.player("Alice"),
        block: w.block(0, 64, 0, "lava"),
    });

    w.advance(61);
    let verdict = w.handle(WorldEvent::BlockIgnite {
        block: w.block(0, 64, 1, "oak_planks"),
        igniting_entity: None,
        igniting_block: Some(w.block(0, 64, 0, "lava")),
    });
    assert_eq!(verdict, Verdict::Cancel);
}

#[test]
fn test_lookups_keep_tags_alive() {
    let w = TestWorld::with_cache(tiny_cache());
    w.handle(WorldEvent::BlockPlace {
        player: w.player("Alice"),
        block: w.block(0, 64, 0, "lava"),
    });

    for z in 1..=3 {
        w.advance(45);
        let verdict = w.handle(WorldEvent::BlockIgnite {
            block: w.block(0, 64, z, "oak_planks"),
            igniting_entity: None,
            igniting_block: Some(w.block(0, 64, 0, "lava")),
        });
        assert_eq!(verdict, Verdict::Proceed, "lookup {} should refresh expiry", z);
    }
}

#[test]
fn test_purge_expired_through_facade() {
    let w = TestWorld::with_cache(tiny_cache());
    w.handle(WorldEvent::BlockPlace {
        player: w.player("Alice"),
        block: w.block(0, 64, 0, "stone"),
    });
    w.advance(120);
    assert_eq!(w.engine.purge_expired(), 1);
    assert_eq!(w.engine.store().location_count(), 0);
}
