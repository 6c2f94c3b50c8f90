//! Enemies plugin: enemies enter at the top, fall through the field and are removed once they
//! leave it at the bottom (move-then-remove).

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::time::Fixed;

use crate::common::body::{BodyConfig, SpriteImage};
use crate::common::kind::EntityKind;
use crate::common::lanes::Lanes;
use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::actions::{MoveTo, RemoveWhenDone};

#[derive(Component)]
pub struct Enemy;

#[derive(Resource, Debug)]
pub struct EnemySpawner {
    timer: Timer,
    lanes: Lanes,
}

impl EnemySpawner {
    pub fn new(every_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(every_secs, TimerMode::Repeating),
            lanes: Lanes::new(7, 3),
        }
    }
}

pub fn plugin(app: &mut App) {
    let every = app.world().resource::<Tunables>().enemy_spawn_secs;
    app.insert_resource(EnemySpawner::new(every)).add_systems(
        FixedUpdate,
        spawn_enemies.run_if(in_state(GameState::InGame)),
    );
}

fn spawn_enemies(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut spawner: ResMut<EnemySpawner>,
    mut commands: Commands,
) {
    spawner.timer.tick(time.delta());

    for _ in 0..spawner.timer.times_finished_this_tick() {
        let x = spawner
            .lanes
            .next_x(tunables.field_half.x, tunables.enemy_size.x);
        spawn_enemy(&mut commands, &tunables, x);
    }
}

pub fn spawn_enemy(commands: &mut Commands, tunables: &Tunables, x: f32) -> Entity {
    let h = tunables.enemy_size.y;
    let from = Vec2::new(x, tunables.above_top(h));
    let to = Vec2::new(x, tunables.below_bottom(h));

    commands
        .spawn((
            Name::new(SpriteImage::Enemy.asset_name()),
            Enemy,
            BodyConfig::new(EntityKind::Enemy, tunables.enemy_size)
                .at(from)
                .image(SpriteImage::Enemy)
                .bundle(),
            MoveTo::linear(from, to, tunables.enemy_fall_secs),
            RemoveWhenDone,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}
