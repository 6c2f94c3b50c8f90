//! Actions: timed moves and act-then-remove.
//!
//! ```text
//! FixedUpdate: advance_moves   tick MoveTo, write Transform, finish -> remove MoveTo or mark PendingDespawn
//! PostUpdate:  despawn_pending despawn everything marked PendingDespawn
//! ```
//!
//! Despawns never happen inside the fixed step. Anything that wants an entity gone inserts
//! `PendingDespawn` and the PostUpdate system does the structural change.

use bevy::prelude::*;
use bevy::time::Fixed;

use crate::common::state::GameState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
}

impl Easing {
    /// Map normalized time [0..1] to normalized distance [0..1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Move translation (x, y) from `from` to `to` over the timer's duration.
/// Z is left alone.
#[derive(Component, Debug, Clone)]
pub struct MoveTo {
    pub from: Vec2,
    pub to: Vec2,
    pub timer: Timer,
    pub easing: Easing,
}

impl MoveTo {
    pub fn new(from: Vec2, to: Vec2, secs: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            timer: Timer::from_seconds(secs.max(0.0), TimerMode::Once),
            easing,
        }
    }

    pub fn linear(from: Vec2, to: Vec2, secs: f32) -> Self {
        Self::new(from, to, secs, Easing::Linear)
    }

    pub fn ease_in_out(from: Vec2, to: Vec2, secs: f32) -> Self {
        Self::new(from, to, secs, Easing::EaseInOut)
    }

    #[inline]
    pub fn sample(&self) -> Vec2 {
        if self.timer.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.timer.fraction()))
    }
}

/// Marker: despawn the entity once its `MoveTo` finishes.
#[derive(Component, Debug, Clone, Copy)]
pub struct RemoveWhenDone;

/// Marker: entity should be removed from the world in PostUpdate.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        advance_moves.run_if(in_state(GameState::InGame)),
    )
    .add_systems(PostUpdate, despawn_pending);
}

pub fn advance_moves(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut MoveTo, &mut Transform, Has<RemoveWhenDone>), Without<PendingDespawn>>,
) {
    for (e, mut mv, mut tf, remove_when_done) in &mut q {
        mv.timer.tick(time.delta());

        let p = mv.sample();
        tf.translation.x = p.x;
        tf.translation.y = p.y;

        if !mv.timer.is_finished() {
            continue;
        }

        if remove_when_done {
            commands.entity(e).insert(PendingDespawn);
        } else {
            commands.entity(e).remove::<MoveTo>();
        }
    }
}

pub fn despawn_pending(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
