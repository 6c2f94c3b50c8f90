//! Items plugin: collectibles drift down the field. Only the player can pick them up.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::time::Fixed;

use crate::common::body::BodyConfig;
use crate::common::kind::EntityKind;
use crate::common::lanes::Lanes;
use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::actions::{MoveTo, RemoveWhenDone};

#[derive(Component)]
pub struct Item;

#[derive(Resource, Debug)]
pub struct ItemSpawner {
    timer: Timer,
    lanes: Lanes,
}

impl ItemSpawner {
    pub fn new(every_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(every_secs, TimerMode::Repeating),
            lanes: Lanes::new(5, 2),
        }
    }
}

pub fn plugin(app: &mut App) {
    let every = app.world().resource::<Tunables>().item_spawn_secs;
    app.insert_resource(ItemSpawner::new(every)).add_systems(
        FixedUpdate,
        spawn_items.run_if(in_state(GameState::InGame)),
    );
}

fn spawn_items(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut spawner: ResMut<ItemSpawner>,
    mut commands: Commands,
) {
    spawner.timer.tick(time.delta());

    for _ in 0..spawner.timer.times_finished_this_tick() {
        let x = spawner.lanes.next_x(tunables.field_half.x, tunables.item_size.x);
        spawn_item(&mut commands, &tunables, x);
    }
}

pub fn spawn_item(commands: &mut Commands, tunables: &Tunables, x: f32) -> Entity {
    let h = tunables.item_size.y;
    let from = Vec2::new(x, tunables.above_top(h));
    let to = Vec2::new(x, tunables.below_bottom(h));

    let e = commands
        .spawn((
            Name::new("Item"),
            Item,
            BodyConfig::new(EntityKind::Item, tunables.item_size)
                .at(from)
                .color(Color::srgb(0.4, 0.95, 0.45))
                .bundle(),
            MoveTo::linear(from, to, tunables.item_fall_secs),
            RemoveWhenDone,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    debug!("Spawned item {e:?} at x={x}");
    e
}
