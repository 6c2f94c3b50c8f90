mod common;

use avian2d::prelude::*;
use bevy::prelude::*;
use vertical_shooter::common::kind::{classify, ContactMask, EntityKind};
use vertical_shooter::plugins::player::Player;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn player_is_spawned_with_player_masks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    let masks = classify(EntityKind::Player);
    let mut q = app
        .world_mut()
        .query_filtered::<(&EntityKind, &CollisionLayers, &ContactMask), With<Player>>();
    let (kind, layers, contact) = q.single(app.world()).expect("exactly one player");

    assert_eq!(*kind, EntityKind::Player);
    assert_eq!(*layers, masks.collision_layers());
    assert_eq!(*contact, masks.contact_mask());
}
