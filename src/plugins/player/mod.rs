//! Player plugin.
//!
//! Pipeline:
//! - Update: sample pointer/keyboard, write PlayerInput resource
//! - Update: turn PlayerInput into an eased MoveTo along the player's own row
//!
//! The player is kinematic: it is moved by actions, never pushed by physics.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::body::{BodyConfig, SpriteImage};
use crate::common::kind::EntityKind;
use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::actions::MoveTo;
use crate::plugins::camera::MainCamera;

/// Horizontal distance of one keyboard step.
const KEY_STEP: f32 = 60.0;

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    /// Pointer position in world space, if the pointer was pressed this frame.
    pointer: Option<Vec2>,
    /// Keyboard steps (negative = left).
    nudge: f32,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, steer.after(gather_input)).run_if(in_state(GameState::InGame)),
        );
}

/// Where the player should go for a pointer location: follow the pointer's x, keep the row.
#[inline]
pub fn player_target(player_pos: Vec2, pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x, player_pos.y)
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let pos = Vec2::new(0.0, -tunables.field_half.y + tunables.player_size.y * 2.0);

    let e = commands
        .spawn((
            Name::new(SpriteImage::Player.asset_name()),
            Player,
            BodyConfig::new(EntityKind::Player, tunables.player_size)
                .dynamic(false)
                .at(pos)
                .image(SpriteImage::Player)
                .bundle(),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    debug!("Spawned player {e:?} at {pos}");
}

fn gather_input(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut input: ResMut<PlayerInput>,
) {
    input.pointer = None;
    input.nudge = 0.0;

    if let Some(keys) = keys {
        if keys.just_pressed(KeyCode::KeyA) || keys.just_pressed(KeyCode::ArrowLeft) {
            input.nudge -= 1.0;
        }
        if keys.just_pressed(KeyCode::KeyD) || keys.just_pressed(KeyCode::ArrowRight) {
            input.nudge += 1.0;
        }
    }

    let Some(buttons) = buttons else { return; };
    if !buttons.pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        debug!("No single MainCamera; ignoring pointer");
        return;
    };

    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => input.pointer = Some(p),
        Err(e) => debug!("viewport_to_world_2d failed: {e:?}"),
    }
}

fn steer(
    mut commands: Commands,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    q_player: Query<(Entity, &Transform, Option<&MoveTo>), With<Player>>,
) {
    let Ok((e, tf, running)) = q_player.single() else {
        return;
    };
    let here = tf.translation.truncate();

    let target = match input.pointer {
        Some(p) => player_target(here, p),
        None if input.nudge != 0.0 => here + Vec2::X * input.nudge * KEY_STEP,
        None => return,
    };

    let limit = tunables.field_half.x - tunables.player_size.x * 0.5;
    let target = Vec2::new(target.x.clamp(-limit, limit), target.y);
    if target == here {
        return;
    }

    // Holding the pointer still keeps re-sending the same target; let that move finish.
    if running.is_some_and(|mv| mv.to == target) {
        return;
    }

    // A new target replaces any move still in flight.
    commands
        .entity(e)
        .insert(MoveTo::ease_in_out(here, target, tunables.player_move_secs));
}
