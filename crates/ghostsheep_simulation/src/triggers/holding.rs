//! HoldingState - предмет в руках игрока + checkpoint gate
//!
//! Инвариант: `drop_item` меняет held/cleared только при `cleared == true`.

use bevy::prelude::*;

/// Класс предмета (сколько очков приносит при сдаче)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum ItemTier {
    #[default]
    Empty,
    Tier1,
    Tier2,
    Tier3,
}

impl ItemTier {
    pub fn points(self) -> u32 {
        match self {
            ItemTier::Empty => 0,
            ItemTier::Tier1 => 1,
            ItemTier::Tier2 => 2,
            ItemTier::Tier3 => 3,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HoldingState {
    pub held: ItemTier,
    cleared: bool,
}

impl HoldingState {
    pub fn new(held: ItemTier, cleared: bool) -> Self {
        Self { held, cleared }
    }

    /// Взять предмет (заменяет текущий), возвращает предыдущий
    pub fn grab_item(&mut self, item: ItemTier) -> ItemTier {
        std::mem::replace(&mut self.held, item)
    }

    /// Сдать предмет: очки по tier, затем held = Empty, cleared = false
    ///
    /// Если gate не пройден - no-op, возвращает 0 и ничего не меняет.
    pub fn drop_item(&mut self) -> u32 {
        if !self.cleared {
            return 0;
        }

        let points = self.held.points();
        self.held = ItemTier::Empty;
        self.cleared = false;
        points
    }

    pub fn set_cleared(&mut self, cleared: bool) {
        self.cleared = cleared;
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}
