//! Headless kinematic stand-in
//!
//! В игре SteeringOutput применяет внешний physics коллаборатор.
//! Для headless прогонов (demo binary, smoke тесты) - простая интеграция:
//! velocity += accel·dt (с cap), position += velocity·dt, damping.

use bevy::prelude::*;

use crate::agent::SteeringOutput;
use crate::clock::SimulationClock;
use crate::components::ArenaPosition;
use crate::SimulationSet;

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KinematicBody {
    pub velocity: Vec2,
    /// Максимальная скорость (m/s)
    pub max_speed: f32,
    /// Доля скорости, теряемая за секунду без ускорения
    pub damping: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            max_speed: 2.0,
            damping: 0.5,
        }
    }
}

impl KinematicBody {
    /// Один шаг интеграции, возвращает смещение
    pub fn step(&mut self, accel: Vec2, dt: f32) -> Vec2 {
        let damping = (1.0 - self.damping * dt).clamp(0.0, 1.0);
        self.velocity = ((self.velocity + accel * dt) * damping).clamp_length_max(self.max_speed);
        self.velocity * dt
    }
}

/// Система: SteeringOutput → ArenaPosition
pub fn integrate_steering(
    mut bodies: Query<(&SteeringOutput, &mut KinematicBody, &mut ArenaPosition)>,
    clock: Res<SimulationClock>,
) {
    for (steering, mut body, mut position) in bodies.iter_mut() {
        let offset = body.step(steering.0, clock.tick_secs_f32());
        if offset != Vec2::ZERO {
            position.0 += offset;
        }
    }
}

/// Headless Motion Plugin (не добавляется SimulationPlugin'ом)
pub struct HeadlessMotionPlugin;

impl Plugin for HeadlessMotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, integrate_steering.in_set(SimulationSet::Motion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_is_capped() {
        let mut body = KinematicBody { damping: 0.0, ..default() };

        for _ in 0..1000 {
            body.step(Vec2::new(10.0, 0.0), 0.1);
        }
        assert!((body.velocity.length() - body.max_speed).abs() < 1e-4);
    }

    #[test]
    fn test_damping_slows_without_accel() {
        let mut body = KinematicBody {
            velocity: Vec2::new(1.0, 0.0),
            ..default()
        };

        body.step(Vec2::ZERO, 0.1);
        assert!(body.velocity.x < 1.0);
        assert!(body.velocity.x > 0.0);
    }
}
