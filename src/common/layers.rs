//! Collision layers.
//!
//! Avian gives each variant the bit `1 << index`, so the declaration order is the bit order.
//! `Default` is reserved by Avian and never used as a gameplay category.

use avian2d::prelude::*;

use super::kind::EntityKind;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Player,
    Enemy,
    Bullet,
    Item,
}

impl From<EntityKind> for Layer {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => Layer::Player,
            EntityKind::Enemy => Layer::Enemy,
            EntityKind::Bullet => Layer::Bullet,
            EntityKind::Item => Layer::Item,
        }
    }
}
