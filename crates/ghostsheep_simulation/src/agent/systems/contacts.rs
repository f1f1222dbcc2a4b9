//! Agent contact + award systems.

use bevy::prelude::*;

use crate::agent::{Agent, AgentMode, AwardPoint};
use crate::components::ArenaPosition;
use crate::effects::{FeedbackEvent, SoundCue};
use crate::physics::ContactEvent;
use crate::scoring::ScoreEvent;
use crate::targeting::{TargetHit, TargetRegistry};

/// Очков за один контакт / один sheep в ring
pub const POINTS_PER_EVENT: u32 = 1;

/// Кому достаётся очко за этого агента прямо сейчас
///
/// Только sheep; нет целей → None. Решение принимается в момент контакта,
/// до Timers, поэтому flip в том же тике его не отменяет.
pub fn sheep_award_target(mode: AgentMode, position: Vec2, targets: &TargetRegistry) -> Option<TargetHit> {
    if !mode.is_sheep() {
        return None;
    }
    targets.nearest(position)
}

/// Система: ghost коснулся игрока → игрок теряет очко
///
/// Только эмиссия событий: ledger меняет apply_score_events.
/// Contact с despawned entity молча пропускается.
pub fn handle_agent_contacts(
    mut contacts: EventReader<ContactEvent>,
    agents: Query<&AgentMode, With<Agent>>,
    targets: TargetRegistry,
    mut score: EventWriter<ScoreEvent>,
    mut feedback: EventWriter<FeedbackEvent>,
) {
    for contact in contacts.read() {
        for (agent, other) in contact.pairs() {
            let Ok(mode) = agents.get(agent) else {
                continue;
            };
            if *mode != AgentMode::Pursuer {
                continue;
            }
            let Some(player) = targets.player_id(other) else {
                continue;
            };

            score.write(ScoreEvent::debit(player, POINTS_PER_EVENT));
            feedback.write(FeedbackEvent::new(agent, SoundCue::LosePoint));
            crate::log(&format!("Ghost {:?} caught player {}", agent, player));
        }
    }
}

/// Система: AwardPoint → очко ближайшему игроку (только если агент sheep)
///
/// Идёт в Contacts (до смены режимов). winPoint только когда очко реально начислено.
pub fn award_points(
    mut requests: EventReader<AwardPoint>,
    agents: Query<(&AgentMode, &ArenaPosition), With<Agent>>,
    targets: TargetRegistry,
    mut score: EventWriter<ScoreEvent>,
    mut feedback: EventWriter<FeedbackEvent>,
) {
    for request in requests.read() {
        let Ok((mode, position)) = agents.get(request.agent) else {
            continue;
        };
        let Some(hit) = sheep_award_target(*mode, position.0, &targets) else {
            crate::log(&format!("AwardPoint: no point for {:?} ({:?})", request.agent, mode));
            continue;
        };

        score.write(ScoreEvent::credit(hit.player, POINTS_PER_EVENT));
        feedback.write(FeedbackEvent::new(request.agent, SoundCue::WinPoint));
        crate::log(&format!("Sheep {:?}: point to {}", request.agent, hit.player));
    }
}
