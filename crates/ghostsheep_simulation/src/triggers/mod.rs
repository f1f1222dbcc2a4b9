//! Triggers domain - collectibles, goal volumes, holding state
//!
//! Все триггеры реагируют на `ContactEvent` от physics коллаборатора
//! и меняют мир только через события (ScoreEvent, StatusCommand, FeedbackEvent)
//! плюс собственные компоненты (Collectible, HoldingState).

use bevy::prelude::*;

pub mod collectible;
pub mod goal;
pub mod holding;


pub use collectible::{ActiveCollectible, Collectible, CollectibleKind, CollectibleStateChanged};
pub use goal::{GoalKind, GoalVolume};
pub use holding::{HoldingState, ItemTier};

use crate::SimulationSet;

/// Trigger Plugin
///
/// Порядок:
/// - Setup: deactivate_new_collectibles (после arm_new_agents - общий RNG)
/// - Contacts: handle_goal_contacts → handle_collectible_contacts (после agent contacts и award_points)
/// - Timers: activate_due_collectibles (после run_mode_switches)
pub struct TriggerPlugin;

impl Plugin for TriggerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollectibleStateChanged>();

        app.add_systems(
            FixedUpdate,
            (
                (
                    collectible::deactivate_new_collectibles,
                    collectible::cancel_removed_collectible_timers,
                )
                    .chain()
                    .in_set(SimulationSet::Setup)
                    .after(crate::agent::systems::arm_new_agents),
                (goal::handle_goal_contacts, collectible::handle_collectible_contacts)
                    .chain()
                    .in_set(SimulationSet::Contacts)
                    .after(crate::agent::systems::award_points),
                collectible::activate_due_collectibles
                    .in_set(SimulationSet::Timers)
                    .after(crate::agent::systems::run_mode_switches),
            ),
        );
    }
}
