//! Camera plugin (render-only).
//!
//! The field is fixed, so the camera never moves. The player plugin reads `MainCamera` to map
//! the pointer into world space.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}
