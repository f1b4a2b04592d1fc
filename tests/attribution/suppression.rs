//! Unknown-Cause Suppression Tests
//!
//! Every category applies the same policy when a cause cannot be resolved:
//! suppress and alert with `disable-unknown` on, proceed silently with it
//! off, and do nothing at all when the category is disabled.

use crate::*;

fn untagged_tnt(w: &TestWorld) -> WorldEvent {
    WorldEvent::EntityExplode {
        entity: w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0),
        blocks: w.row(0, 63, 0, 4),
    }
}

#[test]
fn test_each_explosive_kind_is_suppressed() {
    let w = TestWorld::new();
    let cases = [
        (EntityKind::Tnt, true),
        (EntityKind::EndCrystal, true),
        (EntityKind::Creeper, true),
        (EntityKind::DragonFireball, true),
        (EntityKind::Other("wither".into()), true),
        (EntityKind::TntMinecart, false),
    ];
    for (kind, remove_entity) in cases {
        let entity = w.entity_at(kind.clone(), "exploder", 0, 64, 0);
        let verdict = w.handle(WorldEvent::EntityExplode {
            entity,
            blocks: w.row(0, 63, 0, 2),
        });
        assert_eq!(verdict, Verdict::ClearBlocks { remove_entity }, "kind {}", kind);
    }
    assert!(w.audit.is_empty());
    assert_eq!(w.alerts.len(), 6);
}

#[test]
fn test_lenient_categories_proceed_without_audit() {
    let w = TestWorld::with_config(EngineConfig::default().with_disable_unknown(false));

    assert_eq!(w.handle(untagged_tnt(&w)), Verdict::Proceed);
    assert_eq!(
        w.handle(WorldEvent::BlockExplode {
            origin: w.block(5, 64, 5, "respawn_anchor"),
            blocks: w.row(5, 63, 5, 2),
        }),
        Verdict::Proceed
    );
    assert_eq!(
        w.handle(WorldEvent::EntityDamageByEntity {
            entity: w.entity_at(EntityKind::Painting, "Painting", 1, 65, 0),
            damager: w.entity_at(EntityKind::Other("zombie".into()), "Zombie", 1, 64, 1),
        }),
        Verdict::Proceed
    );

    assert!(w.audit.is_empty());
    assert!(w.alerts.is_empty());
}

#[test]
fn test_disabled_category_is_not_intercepted() {
    let mut config = EngineConfig::default();
    config.entity_explosion.enable = false;
    let w = TestWorld::with_config(config);

    let tnt = w.entity_at(EntityKind::Tnt, "Primed TNT", 0, 64, 0);
    w.handle(WorldEvent::EntitySpawn {
        entity: tnt.clone(),
        source: Some(w.player_entity("Alice")),
    });
    let verdict = w.handle(WorldEvent::EntityExplode {
        entity: tnt.clone(),
        blocks: w.row(0, 63, 0, 2),
    });

    assert_eq!(verdict, Verdict::Proceed);
    assert!(w.audit.is_empty());
    // Nothing consumed the tag
    assert_eq!(w.entity_tag(&tnt).as_deref(), Some("Alice"));
}

#[test]
fn test_custom_alert_message() {
    let config = EngineConfig::from_toml_str(
        r#"
        [entity-explosion]
        alert = "Someone's TNT went off unattended."
        "#,
    )
    .expect("valid config");
    let w = TestWorld::with_config(config);

    w.handle(untagged_tnt(&w));

    let alerts = w.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message, "Someone's TNT went off unattended.");
    assert_eq!(alerts[0].origin, w.pos(0, 64, 0).corner().offset(0.5, 0.0, 0.5));
}

#[test]
fn test_empty_alert_suppresses_silently() {
    let config = EngineConfig::from_toml_str("[entity-explosion]\nalert = \"\"\n").expect("valid config");
    let w = TestWorld::with_config(config);

    assert!(w.handle(untagged_tnt(&w)).is_suppressed());
    assert!(w.alerts.is_empty());
}

#[test]
fn test_unknown_item_frame_damage_cancelled() {
    let w = TestWorld::new();
    let frame = w
        .entity_at(EntityKind::GlowItemFrame, "Glow Item Frame", 0, 65, 0)
        .with_item(Material::new("elytra"));
    let verdict = w.handle(WorldEvent::EntityDamageByEntity {
        entity: frame,
        damager: w.entity_at(EntityKind::Other("zombie".into()), "Zombie", 0, 64, 1),
    });

    assert_eq!(verdict, Verdict::Cancel);
    assert_eq!(
        w.alerts.alerts()[0].message,
        causeway::Category::ItemFrame.default_alert()
    );
}

#[test]
fn test_block_explosion_with_unknown_origin() {
    let w = TestWorld::new();
    let verdict = w.handle(WorldEvent::BlockExplode {
        origin: w.block(5, 64, 5, "white_bed"),
        blocks: w.row(5, 63, 5, 3),
    });
    assert_eq!(verdict, Verdict::ClearBlocks { remove_entity: false });
    assert!(w.location_tag(w.pos(5, 63, 5)).is_none());
}
