//! Projectiles plugin: the player fires straight up on a fixed cadence.
//!
//! Bullets move to just above the top edge and are removed there (move-then-remove). Hits are
//! handled by the contact plugin.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::time::Fixed;

use crate::common::body::{BodyConfig, SpriteImage};
use crate::common::kind::EntityKind;
use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::actions::{MoveTo, RemoveWhenDone};
use crate::plugins::player::Player;

#[derive(Component)]
pub struct Bullet;

#[derive(Resource, Debug)]
pub struct FireTimer(pub Timer);

pub fn plugin(app: &mut App) {
    let every = app.world().resource::<Tunables>().fire_secs;
    app.insert_resource(FireTimer(Timer::from_seconds(every, TimerMode::Repeating)))
        .add_systems(FixedUpdate, fire_bullets.run_if(in_state(GameState::InGame)));
}

fn fire_bullets(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut fire: ResMut<FireTimer>,
    q_player: Query<&Transform, With<Player>>,
    mut commands: Commands,
) {
    fire.0.tick(time.delta());

    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let muzzle = player_tf.translation.truncate()
        + Vec2::Y * (tunables.player_size.y + tunables.bullet_size.y) * 0.5;

    for _ in 0..fire.0.times_finished_this_tick() {
        spawn_bullet(&mut commands, &tunables, muzzle);
    }
}

/// Travel time scales with distance so every bullet has the same speed.
pub fn bullet_travel_secs(tunables: &Tunables, from_y: f32, to_y: f32) -> f32 {
    let full = tunables.field_half.y * 2.0;
    tunables.bullet_travel_secs * (to_y - from_y).abs() / full
}

pub fn spawn_bullet(commands: &mut Commands, tunables: &Tunables, muzzle: Vec2) -> Entity {
    let to = Vec2::new(muzzle.x, tunables.above_top(tunables.bullet_size.y));
    let secs = bullet_travel_secs(tunables, muzzle.y, to.y);

    commands
        .spawn((
            Name::new(SpriteImage::Bullet.asset_name()),
            Bullet,
            BodyConfig::new(EntityKind::Bullet, tunables.bullet_size)
                .at(muzzle)
                .z(2.0)
                .image(SpriteImage::Bullet)
                .bundle(),
            MoveTo::linear(muzzle, to, secs),
            RemoveWhenDone,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}
