//! Causal Chain Tests
//!
//! Multi-event sequences where responsibility must travel through one or
//! more intermediate mechanisms:
//! - Player-lit TNT and TNT primed by an earlier blast
//! - Bed blasts feeding TNT
//! - Ghast fireballs, arrows into end crystals, ignited creepers
//! - TNT minecart cell priority

use crate::*;
use proptest::prelude::*;

// =============================================================================
// PRIMED EXPLOSIVES
// =============================================================================

#[test]
fn test_player_tnt_tags_every_destroyed_cell() {
    let w = TestWorld::new();
    let tnt = w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0);

    w.handle(WorldEvent::EntitySpawn {
        entity: tnt.clone(),
        source: Some(w.player_entity("Alice")),
    });
    assert_eq!(w.entity_tag(&tnt).as_deref(), Some("Alice"));

    let debris = w.row(-2, 63, 0, 5);
    let verdict = w.handle(WorldEvent::EntityExplode {
        entity: tnt.clone(),
        blocks: debris.clone(),
    });

    assert_eq!(verdict, Verdict::Proceed);
    assert_eq!(w.removal_tags(), vec!["#tnt-Alice"; 5]);
    for block in &debris {
        assert_eq!(w.location_tag(block.pos).as_deref(), Some("#tnt-Alice"));
    }
    assert!(w.entity_tag(&tnt).is_none(), "spent TNT must not be reused");
}

#[test]
fn test_tnt_primed_by_blast_extends_chain() {
    let w = TestWorld::new();
    let first = w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0);
    w.handle(WorldEvent::EntitySpawn {
        entity: first.clone(),
        source: Some(w.player_entity("Alice")),
    });
    w.handle(WorldEvent::EntityExplode {
        entity: first,
        blocks: vec![w.block(3, 64, 0, "tnt")],
    });

    // The blast primes the TNT block it hit; the host reports no source
    let second = w.entity_at(EntityKind::Tnt, "Primed TNT", 3, 64, 0);
    w.handle(WorldEvent::EntitySpawn {
        entity: second.clone(),
        source: None,
    });
    assert_eq!(w.entity_tag(&second).as_deref(), Some("#tnt-Alice"));

    w.handle(WorldEvent::EntityExplode {
        entity: second,
        blocks: vec![w.block(6, 64, 0, "stone")],
    });
    assert_eq!(
        w.location_tag(w.pos(6, 64, 0)).as_deref(),
        Some("#tnt-#tnt-Alice")
    );
}

#[test]
fn test_bed_blast_primes_tnt() {
    let w = TestWorld::new();
    let foot = w.block(0, 64, 0, "red_bed").with_state(BlockState::Bed {
        facing: Direction::North,
        part: BedPart::Foot,
    });

    w.handle(WorldEvent::InteractBlock {
        player: w.player("Alice"),
        action: InteractAction::RightClickBlock,
        block: Some(foot.clone()),
    });
    assert_eq!(w.location_tag(w.pos(0, 64, 0)).as_deref(), Some("#bed-Alice"));
    assert_eq!(w.location_tag(w.pos(0, 64, -1)).as_deref(), Some("#bed-Alice"));

    let verdict = w.handle(WorldEvent::BlockExplode {
        origin: foot,
        blocks: vec![w.block(2, 64, 0, "tnt"), w.block(1, 64, 0, "stone")],
    });
    assert_eq!(verdict, Verdict::Proceed);
    assert_eq!(w.removal_tags(), vec!["#bed-Alice"; 2]);

    let tnt = w.entity_at(EntityKind::Tnt, "Primed TNT", 2, 64, 0);
    w.handle(WorldEvent::EntitySpawn {
        entity: tnt.clone(),
        source: None,
    });
    w.handle(WorldEvent::EntityExplode {
        entity: tnt,
        blocks: vec![w.block(4, 64, 0, "glass")],
    });
    assert_eq!(w.removal_tags().last().map(String::as_str), Some("#tnt-#bed-Alice"));
}

// =============================================================================
// PROJECTILES
// =============================================================================

#[test]
fn test_ghast_fireball_blames_its_target() {
    let w = TestWorld::new();
    let ghast = w
        .entity_at(EntityKind::Other("ghast".into()), "Ghast", 0, 80, 0)
        .with_target("Alice");
    let fireball = w
        .entity_at(EntityKind::Fireball, "Fireball", 0, 79, 0)
        .with_shooter(ProjectileSource::Entity(ghast));

    w.handle(WorldEvent::ProjectileLaunch {
        projectile: fireball.clone(),
    });
    w.handle(WorldEvent::EntityExplode {
        entity: fireball.clone(),
        blocks: w.row(0, 64, 0, 2),
    });

    assert_eq!(w.removal_tags(), vec!["#fireball-#Fireball-Alice"; 2]);
    assert!(w.entity_tag(&fireball).is_none());
}

#[test]
fn test_arrow_into_end_crystal() {
    let w = TestWorld::new();
    let arrow = w
        .entity_at(EntityKind::Arrow, "Arrow", 0, 65, 0)
        .with_shooter(ProjectileSource::Entity(w.player_entity("Bob")));
    let crystal = w.entity_at(EntityKind::EndCrystal, "End Crystal", 0, 64, 3);

    w.handle(WorldEvent::ProjectileLaunch {
        projectile: arrow.clone(),
    });
    w.handle(WorldEvent::EntityDamageByEntity {
        entity: crystal.clone(),
        damager: arrow,
    });
    assert_eq!(w.entity_tag(&crystal).as_deref(), Some("Bob"));

    w.handle(WorldEvent::EntityExplode {
        entity: crystal,
        blocks: w.row(0, 63, 3, 3),
    });
    assert_eq!(w.removal_tags(), vec!["#end_crystal-Bob"; 3]);
}

#[test]
fn test_dispenser_arrow_lights_fire() {
    let w = TestWorld::new();
    // Alice placed the dispenser, so its cell is hers until the launch
    let dispenser = w.block(0, 64, 0, "dispenser");
    w.handle(WorldEvent::BlockPlace {
        player: w.player("Alice"),
        block: dispenser.clone(),
    });

    let arrow = w
        .entity_at(EntityKind::Arrow, "Arrow", 0, 64, 1)
        .with_shooter(ProjectileSource::Block(dispenser));
    w.handle(WorldEvent::ProjectileLaunch {
        projectile: arrow.clone(),
    });
    assert_eq!(
        w.location_tag(w.pos(0, 64, 0)).as_deref(),
        Some("#Arrow-dispenser")
    );

    let verdict = w.handle(WorldEvent::BlockIgnite {
        block: w.block(0, 64, 5, "tnt"),
        igniting_entity: Some(arrow),
        igniting_block: None,
    });
    assert_eq!(verdict, Verdict::Proceed);
    assert_eq!(
        w.location_tag(w.pos(0, 64, 5)).as_deref(),
        Some("#Arrow-dispenser")
    );
}

// =============================================================================
// CREEPERS AND MINECARTS
// =============================================================================

#[test]
fn test_ignited_creeper() {
    let w = TestWorld::new();
    let creeper = w.entity_at(EntityKind::Creeper, "Creeper", 1, 64, 1);
    w.handle(WorldEvent::InteractEntity {
        player: w.player("Alice").holding(Material::new("flint_and_steel")),
        target: creeper.clone(),
    });

    let debris = w.row(0, 64, 1, 3);
    w.handle(WorldEvent::EntityExplode {
        entity: creeper,
        blocks: debris.clone(),
    });

    assert_eq!(w.removal_tags(), vec!["#ignitecreeper-Alice"; 3]);
    assert!(w.location_tag(debris[0].pos).is_none());
}

#[test]
fn test_minecart_cell_beats_entity_tag() {
    let w = TestWorld::new();
    w.handle(WorldEvent::BlockPlace {
        player: w.player("Alice"),
        block: w.block(5, 64, 5, "rail"),
    });

    let cart = w.entity_at(EntityKind::TntMinecart, "Minecart with TNT", 5, 64, 5);
    let arrow = w
        .entity_at(EntityKind::Arrow, "Arrow", 5, 65, 0)
        .with_shooter(ProjectileSource::Entity(w.player_entity("Bob")));
    w.handle(WorldEvent::ProjectileHit {
        projectile: arrow,
        hit: Some(cart.clone()),
    });
    assert_eq!(w.entity_tag(&cart).as_deref(), Some("Bob"));

    w.handle(WorldEvent::EntityExplode {
        entity: cart,
        blocks: w.row(4, 63, 5, 3),
    });
    assert_eq!(w.removal_tags(), vec!["#tntminecart-Alice"; 3]);
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Each TNT primed by the previous blast adds exactly one `#tnt` link
    #[test]
    fn prop_tnt_chain_depth(links in 1usize..6, player in "[A-Za-z][A-Za-z0-9_]{2,15}") {
        let w = TestWorld::new();
        let first = w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0);
        w.handle(WorldEvent::EntitySpawn {
            entity: first.clone(),
            source: Some(w.player_entity(&player)),
        });

        let mut current = first;
        for x in 1..=links as i32 {
            w.handle(WorldEvent::EntityExplode {
                entity: current,
                blocks: vec![w.block(x * 4, 64, 0, "tnt")],
            });
            current = w.entity_at(EntityKind::Tnt, "Primed TNT", x * 4, 64, 0);
            w.handle(WorldEvent::EntitySpawn {
                entity: current.clone(),
                source: None,
            });
        }

        let expected = format!("{}{}", "#tnt-".repeat(links), player);
        prop_assert_eq!(w.entity_tag(&current), Some(expected));
    }
}
