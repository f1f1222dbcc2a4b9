//! Scoring events

use bevy::prelude::*;

use crate::components::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDelta {
    Credit(u32),
    Debit(u32),
}

/// Event: изменить счёт игрока
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub player: PlayerId,
    pub delta: ScoreDelta,
}

impl ScoreEvent {
    pub fn credit(player: PlayerId, amount: u32) -> Self {
        Self { player, delta: ScoreDelta::Credit(amount) }
    }

    pub fn debit(player: PlayerId, amount: u32) -> Self {
        Self { player, delta: ScoreDelta::Debit(amount) }
    }
}
