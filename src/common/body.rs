//! Physics body setup.
//!
//! `BodyConfig` is a by-value builder: each setter is idempotent and the finished bundle is
//! inserted once, so nothing is mutated behind the caller's back.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::kind::EntityKind;

/// Sprite art for a body. Rendering is asset-free for now, so each image maps to a tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteImage {
    Player,
    Enemy,
    Bullet,
}

impl SpriteImage {
    pub fn asset_name(self) -> &'static str {
        match self {
            SpriteImage::Player => "player",
            SpriteImage::Enemy => "Enemy-0",
            SpriteImage::Bullet => "bullet",
        }
    }

    pub fn tint(self) -> Color {
        match self {
            SpriteImage::Player => Color::srgb(0.2, 0.75, 0.9),
            SpriteImage::Enemy => Color::srgb(0.9, 0.25, 0.25),
            SpriteImage::Bullet => Color::srgb(1.0, 0.85, 0.3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BodyConfig {
    kind: EntityKind,
    size: Vec2,
    position: Vec2,
    z: f32,
    dynamic: bool,
    color: Color,
}

impl BodyConfig {
    /// Physics body sized to the sprite, gravity off and rotation locked.
    pub fn new(kind: EntityKind, size: Vec2) -> Self {
        Self {
            kind,
            size,
            position: Vec2::ZERO,
            z: 1.0,
            dynamic: true,
            color: Color::WHITE,
        }
    }

    pub fn dynamic(mut self, active: bool) -> Self {
        self.dynamic = active;
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    pub fn image(mut self, image: SpriteImage) -> Self {
        self.color = image.tint();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn rigid_body(&self) -> RigidBody {
        if self.dynamic {
            RigidBody::Dynamic
        } else {
            RigidBody::Kinematic
        }
    }

    pub fn bundle(self) -> impl Bundle {
        let masks = self.kind.masks();
        (
            self.kind,
            Sprite {
                color: self.color,
                custom_size: Some(self.size),
                ..default()
            },
            Transform::from_translation(self.position.extend(self.z)),
            self.rigid_body(),
            Collider::rectangle(self.size.x, self.size.y),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            masks.collision_layers(),
            masks.contact_mask(),
            // Avian only writes CollisionStart if one of the colliders opts in.
            CollisionEventsEnabled,
        )
    }
}
