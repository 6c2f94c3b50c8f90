mod common;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use vertical_shooter::common::kind::{classify, EntityKind};
use vertical_shooter::common::tunables::Tunables;
use vertical_shooter::plugins::contact::Score;

fn spawn_kind(app: &mut App, kind: EntityKind) -> Entity {
    let masks = classify(kind);
    app.world_mut()
        .spawn((kind, masks.collision_layers(), masks.contact_mask()))
        .id()
}

fn inject(app: &mut App, a: Entity, b: Entity) {
    app.world_mut().write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}

#[test]
fn bullet_hit_scores_and_despawns_both() {
    let mut app = common::app_contacts_only();
    // Messages backing storage for MessageReader<CollisionStart>; normally owned by Avian.
    app.world_mut().init_resource::<Messages<CollisionStart>>();

    // First tick enters GameState::InGame.
    app.update();

    let bullet = spawn_kind(&mut app, EntityKind::Bullet);
    let enemy = spawn_kind(&mut app, EntityKind::Enemy);
    inject(&mut app, bullet, enemy);

    // Detection + resolution live in the fixed step.
    app.world_mut().run_schedule(FixedPostUpdate);
    // PostUpdate despawns whatever was marked.
    app.update();

    assert!(app.world().get_entity(bullet).is_err());
    assert!(app.world().get_entity(enemy).is_err());
    assert_eq!(
        app.world().resource::<Score>().points,
        Tunables::default().points_per_enemy
    );
}

#[test]
fn bullets_passing_items_are_not_contacts() {
    let mut app = common::app_contacts_only();
    app.world_mut().init_resource::<Messages<CollisionStart>>();
    app.update();

    let bullet = spawn_kind(&mut app, EntityKind::Bullet);
    let item = spawn_kind(&mut app, EntityKind::Item);
    inject(&mut app, bullet, item);

    app.world_mut().run_schedule(FixedPostUpdate);
    app.update();

    assert!(app.world().get_entity(bullet).is_ok());
    assert!(app.world().get_entity(item).is_ok());
    assert_eq!(*app.world().resource::<Score>(), Score::default());
}
