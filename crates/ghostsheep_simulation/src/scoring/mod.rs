//! Scoring domain - ScoreLedger + ScoreEvent
//!
//! Ledger меняется только через `ScoreEvent` (apply_score_events),
//! остальные системы лишь генерируют события.

use bevy::prelude::*;

pub mod events;
pub mod ledger;
pub mod systems;

pub use events::{ScoreDelta, ScoreEvent};
pub use ledger::{BalancePolicy, ScoreLedger};
pub use systems::{apply_score_events, register_players};

use crate::config::SimulationConfig;
use crate::SimulationSet;

/// Scoring Plugin
///
/// - Setup: register_players (запись с 0 для каждого нового Player)
/// - Scoring: apply_score_events (последним в тике)
pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        let policy = app
            .world()
            .get_resource::<SimulationConfig>()
            .map(|config| config.ledger)
            .unwrap_or_default();

        app.insert_resource(ScoreLedger::new(policy))
            .add_event::<ScoreEvent>();

        app.add_systems(
            FixedUpdate,
            (
                register_players.in_set(SimulationSet::Setup),
                apply_score_events.in_set(SimulationSet::Scoring),
            ),
        );
    }
}
