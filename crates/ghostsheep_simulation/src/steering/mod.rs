//! Steering - мгновенный вектор ускорения агента
//!
//! Чистые функции, без состояния. Диспатч по `AgentMode`:
//! - Evader (sheep): `flee_within` - убегать от цели, только если она ближе R
//! - Pursuer (ghost): `seek` - всегда двигаться к цели
//!
//! Результат не интегрируется здесь: его применяет physics коллаборатор.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::agent::AgentMode;


/// Параметры steering агента
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct SteeringParams {
    /// Модуль выходного ускорения (A)
    pub max_accel: f32,
    /// Радиус реакции sheep (R): дальше - стоим на месте
    pub engagement_radius: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_accel: 1.0,
            engagement_radius: 5.0,
        }
    }
}

/// Steering для режима `mode` относительно ближайшей цели
///
/// Нет цели → `Vec2::ZERO`. Нулевая дистанция → `Vec2::ZERO` (направление не определено).
pub fn compute_steering(
    self_position: Vec2,
    target_position: Option<Vec2>,
    mode: AgentMode,
    params: &SteeringParams,
) -> Vec2 {
    let Some(target) = target_position else {
        return Vec2::ZERO;
    };

    let delta = target - self_position;

    match mode {
        AgentMode::Evader => flee_within(delta, params.engagement_radius, params.max_accel),
        AgentMode::Pursuer => seek(delta, params.max_accel),
    }
}

/// От цели с модулем `max_accel`, если `|delta| <= radius`
pub fn flee_within(delta: Vec2, radius: f32, max_accel: f32) -> Vec2 {
    if delta.length() <= radius {
        -delta.normalize_or_zero() * max_accel
    } else {
        Vec2::ZERO
    }
}

/// К цели с модулем `max_accel`
pub fn seek(delta: Vec2, max_accel: f32) -> Vec2 {
    delta.normalize_or_zero() * max_accel
}
