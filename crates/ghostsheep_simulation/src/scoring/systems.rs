//! Scoring systems.

use bevy::prelude::*;

use crate::components::Player;
use crate::scoring::{ScoreDelta, ScoreEvent, ScoreLedger};

/// System: завести запись в ledger для каждого нового игрока
pub fn register_players(players: Query<&Player, Added<Player>>, mut ledger: ResMut<ScoreLedger>) {
    for player in players.iter() {
        if !ledger.contains(player.id) {
            ledger.register(player.id);
            crate::log(&format!("Ledger: registered player {}", player.id));
        }
    }
}

/// System: применить ScoreEvent к ledger (в порядке отправки)
pub fn apply_score_events(mut events: EventReader<ScoreEvent>, mut ledger: ResMut<ScoreLedger>) {
    for event in events.read() {
        let balance = match event.delta {
            ScoreDelta::Credit(amount) => ledger.add_points(event.player, amount),
            ScoreDelta::Debit(amount) => ledger.remove_points(event.player, amount),
        };

        crate::log_info(&format!(
            "Score: {} {:?} → {} points",
            event.player, event.delta, balance
        ));
    }
}
