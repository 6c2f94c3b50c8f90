//! Lighting plugin (Firefly) (render-only).
//!
//! Every player gets a point light as a child, so it follows without a sync system.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::plugins::player::Player;

#[derive(Component)]
pub struct PlayerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(Update, attach_player_light);
}

fn attach_player_light(mut commands: Commands, q_player: Query<Entity, Added<Player>>) {
    for player in &q_player {
        commands.entity(player).with_children(|parent| {
            parent.spawn((
                Name::new("PlayerLight"),
                PlayerLight,
                PointLight2d {
                    color: Color::srgb(0.35, 0.55, 1.0),
                    radius: 300.0,
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 10.0),
            ));
        });
    }
}
