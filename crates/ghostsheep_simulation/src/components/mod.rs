//! ECS Components общие для всех доменов
//!
//! - world: позиционирование на арене (ArenaPosition, ArenaBounds)
//! - player: игроки-цели (Player, PlayerId)
//!
//! Компоненты агентов живут в `crate::agent`, триггеров - в `crate::triggers`.

pub mod player;
pub mod world;

pub use player::*;
pub use world::*;
