//! Feature plugins.

use bevy::prelude::*;

pub mod actions;
pub mod contact;
pub mod core;
pub mod enemies;
pub mod items;
pub mod physics;
pub mod player;
pub mod projectiles;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
///
/// `core` goes first: later plugins read `Tunables` while building.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    actions::plugin(app);
    contact::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    items::plugin(app);
    projectiles::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
