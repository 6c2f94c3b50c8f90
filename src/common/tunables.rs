//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Half extents of the visible play field, in pixels.
    pub field_half: Vec2,
    pub player_size: Vec2,
    pub player_move_secs: f32,
    pub bullet_size: Vec2,
    pub fire_secs: f32,
    pub bullet_travel_secs: f32,
    pub enemy_size: Vec2,
    pub enemy_spawn_secs: f32,
    pub enemy_fall_secs: f32,
    pub item_size: Vec2,
    pub item_spawn_secs: f32,
    pub item_fall_secs: f32,
    pub points_per_enemy: u32,
    pub points_per_item: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            field_half: Vec2::new(240.0, 400.0),
            player_size: Vec2::new(40.0, 40.0),
            player_move_secs: 0.1,
            bullet_size: Vec2::new(6.0, 16.0),
            fire_secs: 0.25,
            bullet_travel_secs: 1.0,
            enemy_size: Vec2::new(36.0, 36.0),
            enemy_spawn_secs: 0.8,
            enemy_fall_secs: 4.0,
            item_size: Vec2::new(20.0, 20.0),
            item_spawn_secs: 5.0,
            item_fall_secs: 6.0,
            points_per_enemy: 10,
            points_per_item: 50,
        }
    }
}

impl Tunables {
    /// Y just outside the top edge, where things enter or leave the field.
    #[inline]
    pub fn above_top(&self, height: f32) -> f32 {
        self.field_half.y + height
    }

    #[inline]
    pub fn below_bottom(&self, height: f32) -> f32 {
        -self.field_half.y - height
    }
}
