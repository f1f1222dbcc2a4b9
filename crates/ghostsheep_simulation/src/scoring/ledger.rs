//! ScoreLedger - очки по игрокам
//!
//! Инвариант: одна запись на PlayerId (BTreeMap, стабильный порядок для вывода).
//! Списание ниже нуля решается `BalancePolicy`, одинаково для всех вызовов.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::components::PlayerId;

/// Что делать, если списывают больше, чем есть
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalancePolicy {
    /// Баланс не опускается ниже 0
    #[default]
    ClampAtZero,
    /// Баланс может уйти в минус
    AllowNegative,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ScoreLedger {
    policy: BalancePolicy,
    entries: BTreeMap<PlayerId, i64>,
}

impl ScoreLedger {
    pub fn new(policy: BalancePolicy) -> Self {
        Self {
            policy,
            entries: BTreeMap::new(),
        }
    }

    pub fn policy(&self) -> BalancePolicy {
        self.policy
    }

    /// Завести запись с 0 (no-op если уже есть)
    pub fn register(&mut self, player: PlayerId) {
        self.entries.entry(player).or_insert(0);
    }

    pub fn add_points(&mut self, player: PlayerId, amount: u32) -> i64 {
        let points = self.entries.entry(player).or_insert(0);
        *points = points.saturating_add(i64::from(amount));
        *points
    }

    /// Списать очки; возвращает новый баланс
    pub fn remove_points(&mut self, player: PlayerId, amount: u32) -> i64 {
        let policy = self.policy;
        let points = self.entries.entry(player).or_insert(0);
        let lowered = points.saturating_sub(i64::from(amount));

        *points = match policy {
            BalancePolicy::ClampAtZero => lowered.max(0),
            BalancePolicy::AllowNegative => lowered,
        };
        *points
    }

    /// Незарегистрированный игрок → 0
    pub fn current_points(&self, player: PlayerId) -> i64 {
        self.entries.get(&player).copied().unwrap_or(0)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.entries.contains_key(&player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.entries.iter().map(|(player, points)| (*player, *points))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
