//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `vertical_shooter::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use vertical_shooter::common::state::GameState;
use vertical_shooter::plugins;

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists for physics.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    vertical_shooter::game::configure_headless(&mut app);
    // `App::run` would call these; tests drive `update` directly.
    app.finish();
    app.cleanup();
    app
}

/// Just the pieces needed to resolve contacts: tunables, actions, contact pipeline.
pub fn app_contacts_only() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();

    plugins::core::plugin(&mut app);
    plugins::actions::plugin(&mut app);
    plugins::contact::plugin(&mut app);
    app
}

/// Real Avian physics plus the contact pipeline, without the auto spawners.
///
/// Every `update` advances time by exactly one fixed step, so Avian runs once per frame.
pub fn app_physics_contacts() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 64.0,
    )));
    app.init_state::<GameState>();

    plugins::core::plugin(&mut app);
    plugins::physics::plugin(&mut app);
    plugins::actions::plugin(&mut app);
    plugins::contact::plugin(&mut app);
    // `App::run` would call these; tests drive `update` directly.
    app.finish();
    app.cleanup();
    app
}
