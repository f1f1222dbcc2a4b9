//! Player (target) components
//!
//! Игроки - внешние сущности (input/physics коллаборатор владеет ими).
//! `Player` - это и есть target tag: только entities с ним участвуют
//! в nearest-target поиске и получают status broadcast от агентов.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable ID игрока (ключ ScoreLedger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Target tag + владелец очков
///
/// Автоматически добавляет ArenaPosition и HoldingState через Required Components.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(crate::components::ArenaPosition, crate::triggers::HoldingState)]
pub struct Player {
    pub id: PlayerId,
}

impl Player {
    pub fn new(id: u32) -> Self {
        Self { id: PlayerId(id) }
    }
}
