//! World positioning: ArenaPosition, ArenaBounds

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Позиция на плоской арене (X/Z плоскость мира)
///
/// ECS authoritative для AI decisions. Physics коллаборатор
/// синхронизирует свой Transform через `to_world_position`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ArenaPosition(pub Vec2);

impl ArenaPosition {
    pub fn new(x: f32, z: f32) -> Self {
        Self(Vec2::new(x, z))
    }

    /// Vec3 → плоскость (Y отбрасывается)
    pub fn from_world_position(pos: Vec3) -> Self {
        Self(Vec2::new(pos.x, pos.z))
    }

    /// Плоскость → Vec3 (для spawn коллайдеров / визуалов)
    pub fn to_world_position(&self, y: f32) -> Vec3 {
        Vec3::new(self.0.x, y, self.0.y)
    }
}

/// Прямоугольник арены для случайного респавна collectibles
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min_x: 2.0,
            max_x: 26.0,
            min_z: -18.5,
            max_z: -2.0,
        }
    }
}

impl ArenaBounds {
    pub fn contains(&self, pos: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_z..=self.max_z).contains(&pos.y)
    }

    /// Конечные границы, min <= max по обеим осям
    pub fn is_valid(&self) -> bool {
        let finite = [self.min_x, self.max_x, self.min_z, self.max_z]
            .iter()
            .all(|v| v.is_finite());
        finite && self.min_x <= self.max_x && self.min_z <= self.max_z
    }

    /// Равномерно случайная точка внутри bounds
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.gen_range(self.min_x..=self.max_x),
            rng.gen_range(self.min_z..=self.max_z),
        )
    }
}
