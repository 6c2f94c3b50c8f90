//! Contact plugin: filter Avian collision starts through contact masks, then apply gameplay.
//!
//! ```text
//! FixedPostUpdate
//!   Avian writes CollisionStart
//!   detect_contacts   CollisionStart + (EntityKind, CollisionLayers, ContactMask) -> ContactBegan
//!   resolve_contacts  ContactBegan -> Score, PendingDespawn
//! ```
//!
//! Collision masks decide what Avian simulates. Contact masks decide what gameplay hears about.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::kind::{reports_contact, ContactMask, EntityKind};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::actions::PendingDespawn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contactant {
    pub entity: Entity,
    pub kind: EntityKind,
}

/// Two classified entities started touching and at least one of them asked to hear about it.
///
/// Ordered so that `first.kind <= second.kind`.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactBegan {
    pub first: Contactant,
    pub second: Contactant,
}

impl ContactBegan {
    pub fn new(a: Contactant, b: Contactant) -> Self {
        if a.kind <= b.kind {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    #[inline]
    pub fn kinds(&self) -> (EntityKind, EntityKind) {
        (self.first.kind, self.second.kind)
    }
}

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
    pub hits_taken: u32,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Score>()
        .add_message::<ContactBegan>()
        .add_systems(
            FixedPostUpdate,
            (
                detect_contacts.after(CollisionEventSystems),
                resolve_contacts.after(detect_contacts),
            )
                .run_if(in_state(GameState::InGame)),
        );
}

#[inline]
fn owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

pub fn detect_contacts(
    mut started: MessageReader<CollisionStart>,
    q: Query<(&EntityKind, &CollisionLayers, &ContactMask)>,
    mut writer: MessageWriter<ContactBegan>,
    // Per-run dedupe of unordered pairs.
    mut seen: Local<HashSet<(Entity, Entity)>>,
) {
    seen.clear();

    for ev in started.read() {
        let a = owner(ev.collider1, ev.body1);
        let b = owner(ev.collider2, ev.body2);
        if a == b {
            continue;
        }

        let Ok((kind_a, layers_a, contact_a)) = q.get(a) else {
            continue;
        };
        let Ok((kind_b, layers_b, contact_b)) = q.get(b) else {
            continue;
        };

        if !reports_contact(layers_a, *contact_a, layers_b, *contact_b) {
            continue;
        }

        if !seen.insert((a.min(b), a.max(b))) {
            continue;
        }

        writer.write(ContactBegan::new(
            Contactant { entity: a, kind: *kind_a },
            Contactant { entity: b, kind: *kind_b },
        ));
    }
}

pub fn resolve_contacts(
    mut commands: Commands,
    mut reader: MessageReader<ContactBegan>,
    tunables: Res<Tunables>,
    mut score: ResMut<Score>,
    q_pending: Query<(), With<PendingDespawn>>,
    // Entities removed earlier in this run; a bullet only counts once.
    mut removed: Local<HashSet<Entity>>,
) {
    removed.clear();

    for contact in reader.read() {
        let (first, second) = (contact.first.entity, contact.second.entity);
        if [first, second]
            .iter()
            .any(|e| removed.contains(e) || q_pending.contains(*e))
        {
            continue;
        }

        match contact.kinds() {
            (EntityKind::Enemy, EntityKind::Bullet) => {
                score.points += tunables.points_per_enemy;
                for e in [first, second] {
                    commands.entity(e).insert(PendingDespawn);
                    removed.insert(e);
                }
                debug!("Enemy {first:?} destroyed by bullet {second:?}");
            }
            (EntityKind::Player, EntityKind::Enemy) => {
                score.hits_taken += 1;
                commands.entity(second).insert(PendingDespawn);
                removed.insert(second);
                info!("Player hit by enemy {second:?} ({} hits)", score.hits_taken);
            }
            (EntityKind::Player, EntityKind::Item) => {
                score.points += tunables.points_per_item;
                commands.entity(second).insert(PendingDespawn);
                removed.insert(second);
                debug!("Item {second:?} collected");
            }
            _ => {}
        }
    }
}
