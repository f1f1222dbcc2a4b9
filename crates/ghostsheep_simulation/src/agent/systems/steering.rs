//! Per-tick steering для агентов.

use bevy::prelude::*;

use crate::agent::{Agent, AgentMode, NearestTarget, SteeringOutput};
use crate::components::ArenaPosition;
use crate::steering::{compute_steering, SteeringParams};
use crate::targeting::TargetRegistry;

/// Система: nearest target → steering вектор
///
/// Безопасна каждый тик: нет целей → нулевой вектор и пустой NearestTarget.
pub fn compute_agent_steering(
    mut agents: Query<
        (
            &AgentMode,
            &ArenaPosition,
            &SteeringParams,
            &mut SteeringOutput,
            &mut NearestTarget,
        ),
        With<Agent>,
    >,
    targets: TargetRegistry,
) {
    for (mode, position, params, mut output, mut nearest) in agents.iter_mut() {
        let hit = targets.nearest(position.0);
        let steering = compute_steering(position.0, hit.map(|h| h.position), *mode, params);

        // Проверяем изменение - иначе Changed<SteeringOutput> срабатывает каждый тик
        if output.0 != steering {
            output.0 = steering;
        }
        let nearest_entity = hit.map(|h| h.entity);
        if nearest.0 != nearest_entity {
            nearest.0 = nearest_entity;
        }
    }
}
