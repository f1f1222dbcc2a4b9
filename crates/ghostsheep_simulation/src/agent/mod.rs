//! Agent domain - ghost/sheep state machine
//!
//! Каждый тик: nearest target → steering → SteeringOutput.
//! Между тиками (в Timers set): сработавший таймер → flip режима +
//! status broadcast всем целям + re-arm.
//!
//! Компоненты в `components`, события в `events`, логика в `systems`.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::*;
pub use events::*;

use crate::SimulationSet;

/// Agent Plugin
///
/// Порядок внутри FixedUpdate (через SimulationSet):
/// 1. Setup - arm_new_agents, cancel_removed_agent_timers
/// 2. Contacts - handle_agent_contacts → award_points (режим на момент контакта)
/// 3. Timers - apply_forced_switches → run_mode_switches
/// 4. Steering - compute_agent_steering
pub struct AgentPlugin;

impl Plugin for AgentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ModeChanged>()
            .add_event::<ForceModeSwitch>()
            .add_event::<AwardPoint>();

        app.add_systems(
            FixedUpdate,
            (
                (systems::arm_new_agents, systems::cancel_removed_agent_timers)
                    .chain()
                    .in_set(SimulationSet::Setup),
                (systems::handle_agent_contacts, systems::award_points)
                    .chain()
                    .in_set(SimulationSet::Contacts),
                (systems::apply_forced_switches, systems::run_mode_switches)
                    .chain()
                    .in_set(SimulationSet::Timers),
                systems::compute_agent_steering.in_set(SimulationSet::Steering),
            ),
        );
    }
}
