//! Entity classification.
//!
//! Every gameplay entity carries exactly one [`EntityKind`]. The kind alone decides the three
//! physics masks the entity is spawned with:
//!
//! ```text
//!   kind    category   collides with     reports contact with
//!   Player  Player     Enemy | Item      Item | Enemy
//!   Enemy   Enemy      Bullet | Player   Bullet | Player
//!   Bullet  Bullet     Enemy             Enemy
//!   Item    Item       Player            Player
//! ```
//!
//! The tables below are plain `match`es with no wildcard arm: adding a kind will not compile
//! until every table names it.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::layers::Layer;

/// Gameplay role of an entity. Assigned at spawn, never changed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    Bullet,
    Item,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Player,
        EntityKind::Enemy,
        EntityKind::Bullet,
        EntityKind::Item,
    ];

    #[inline]
    pub fn masks(self) -> PhysicsMasks {
        classify(self)
    }
}

/// Category, collision and contact masks for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsMasks {
    pub category: LayerMask,
    pub collision: LayerMask,
    pub contact: LayerMask,
}

impl PhysicsMasks {
    /// Avian layers: membership is the category, filters are the collision mask.
    #[inline]
    pub fn collision_layers(&self) -> CollisionLayers {
        CollisionLayers::new(self.category, self.collision)
    }

    #[inline]
    pub fn contact_mask(&self) -> ContactMask {
        ContactMask(self.contact)
    }
}

/// Categories whose contact with this entity should be reported to gameplay.
///
/// Avian has no contact-test field of its own; [`reports_contact`] reads this next to
/// `CollisionLayers` when filtering collision starts.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct ContactMask(pub LayerMask);

/// Derive the physics masks for a kind.
pub fn classify(kind: EntityKind) -> PhysicsMasks {
    PhysicsMasks {
        category: category_mask(kind),
        collision: collision_mask(kind),
        contact: contact_mask(kind),
    }
}

fn category_mask(kind: EntityKind) -> LayerMask {
    LayerMask::from(Layer::from(kind))
}

fn collision_mask(kind: EntityKind) -> LayerMask {
    match kind {
        EntityKind::Player => LayerMask::from([Layer::Enemy, Layer::Item]),
        EntityKind::Enemy => LayerMask::from([Layer::Bullet, Layer::Player]),
        EntityKind::Bullet => LayerMask::from(Layer::Enemy),
        EntityKind::Item => LayerMask::from(Layer::Player),
    }
}

fn contact_mask(kind: EntityKind) -> LayerMask {
    match kind {
        EntityKind::Player => LayerMask::from([Layer::Item, Layer::Enemy]),
        EntityKind::Enemy => LayerMask::from([Layer::Bullet, Layer::Player]),
        EntityKind::Bullet => LayerMask::from(Layer::Enemy),
        EntityKind::Item => LayerMask::from(Layer::Player),
    }
}

/// A contact is reported when either side's contact mask names the other side's category.
#[inline]
pub fn reports_contact(
    a: &CollisionLayers,
    a_contact: ContactMask,
    b: &CollisionLayers,
    b_contact: ContactMask,
) -> bool {
    (*a_contact & b.memberships) != LayerMask::NONE
        || (*b_contact & a.memberships) != LayerMask::NONE
}
