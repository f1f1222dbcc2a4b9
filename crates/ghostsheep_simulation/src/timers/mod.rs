//! Delay-таймеры (замена engine-specific Invoke/coroutines)
//!
//! Один `DelayQueue` на вид таймера, дренируется внутри FixedUpdate.
//! Инвариант: не более одного pending таймера на ключ (entity).

use bevy::prelude::*;
use rand::Rng;

use crate::config::DelayRange;

pub mod delay_queue;


pub use delay_queue::DelayQueue;

/// Pending смены режима агентов (agent entity → due tick)
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct ModeSwitchTimers(pub DelayQueue<Entity>);

/// Pending реактивации collectibles (collectible entity → due tick)
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct CollectibleTimers(pub DelayQueue<Entity>);

/// Случайная задержка в [min, max] секунд (равномерно)
pub fn random_delay_secs(range: DelayRange, rng: &mut impl Rng) -> f32 {
    rng.gen_range(range.min_secs..=range.max_secs)
}
