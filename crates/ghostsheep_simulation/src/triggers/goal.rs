//! GoalVolume - stateless триггеры (ring, drop-off, checkpoint)

use bevy::prelude::*;

use crate::agent::systems::{sheep_award_target, POINTS_PER_EVENT};
use crate::agent::{Agent, AgentMode};
use crate::components::{ArenaPosition, Player};
use crate::effects::{FeedbackEvent, SoundCue};
use crate::physics::ContactEvent;
use crate::scoring::ScoreEvent;
use crate::targeting::TargetRegistry;
use crate::triggers::HoldingState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum GoalKind {
    /// Центральный ring: sheep внутри → очко ближайшему игроку
    Ring,
    /// Зона сдачи предметов: игрок сдаёт held item за очки
    DropOff,
    /// Checkpoint: открывает gate (cleared) для сдачи
    Checkpoint,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(crate::components::ArenaPosition)]
pub struct GoalVolume {
    pub kind: GoalKind,
}

impl GoalVolume {
    pub fn new(kind: GoalKind) -> Self {
        Self { kind }
    }
}

/// Система: contact с GoalVolume
///
/// - Ring + sheep-агент → очко ближайшему игроку + winPoint (решается сразу, до Timers)
/// - DropOff + игрок → drop_item, очки по tier
/// - Checkpoint + игрок → cleared = true
pub fn handle_goal_contacts(
    mut contacts: EventReader<ContactEvent>,
    goals: Query<(Entity, &GoalVolume)>,
    agents: Query<(&AgentMode, &ArenaPosition), With<Agent>>,
    targets: TargetRegistry,
    mut players: Query<(&Player, &mut HoldingState)>,
    mut score: EventWriter<ScoreEvent>,
    mut feedback: EventWriter<FeedbackEvent>,
) {
    for contact in contacts.read() {
        for (goal_entity, other) in contact.pairs() {
            let Ok((goal_entity, goal)) = goals.get(goal_entity) else {
                continue;
            };

            match goal.kind {
                GoalKind::Ring => {
                    let Ok((mode, position)) = agents.get(other) else {
                        continue;
                    };
                    let Some(hit) = sheep_award_target(*mode, position.0, &targets) else {
                        continue;
                    };
                    score.write(ScoreEvent::credit(hit.player, POINTS_PER_EVENT));
                    feedback.write(FeedbackEvent::new(goal_entity, SoundCue::WinPoint));
                    crate::log(&format!("Sheep {:?} in ring: point to {}", other, hit.player));
                }
                GoalKind::DropOff => {
                    let Ok((player, mut holding)) = players.get_mut(other) else {
                        continue;
                    };
                    let points = holding.drop_item();
                    if points > 0 {
                        score.write(ScoreEvent::credit(player.id, points));
                        feedback.write(FeedbackEvent::new(other, SoundCue::WinPoint));
                        crate::log(&format!("Player {} dropped item: +{}", player.id, points));
                    }
                }
                GoalKind::Checkpoint => {
                    let Ok((player, mut holding)) = players.get_mut(other) else {
                        continue;
                    };
                    if !holding.is_cleared() {
                        holding.set_cleared(true);
                        crate::log(&format!("Player {} cleared checkpoint", player.id));
                    }
                }
            }
        }
    }
}
