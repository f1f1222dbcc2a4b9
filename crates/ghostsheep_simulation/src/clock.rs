//! Simulation clock - tick counter для delay-таймеров
//!
//! Таймеры считаются в тиках FixedUpdate, а не в wall-clock:
//! так смена режима всегда попадает на границу тика.

use bevy::prelude::*;

/// Допуск (в тиках) на f32 шум задержки перед округлением вверх
const TICK_EPSILON: f64 = 1e-4;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    /// Номер текущего тика (0 до первого FixedUpdate)
    pub tick: u64,
    /// Длина тика (секунды)
    pub tick_secs: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl SimulationClock {
    pub fn new(tick_secs: f64) -> Self {
        Self { tick: 0, tick_secs }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.tick as f64 * self.tick_secs
    }

    /// Длина тика для f32 математики (движение)
    pub fn tick_secs_f32(&self) -> f32 {
        self.tick_secs as f32
    }

    /// Секунды → тики (ceil, минимум 1 тик - таймер никогда не срабатывает в тот же тик)
    ///
    /// Задержки приходят в f32: шум округления гасится `TICK_EPSILON` до ceil.
    pub fn secs_to_ticks(&self, secs: f32) -> u64 {
        let ticks = f64::from(secs) / self.tick_secs;
        ((ticks - TICK_EPSILON).ceil() as u64).max(1)
    }

    /// Абсолютный тик срабатывания для задержки `secs` от текущего тика
    pub fn due_after(&self, secs: f32) -> u64 {
        self.tick.saturating_add(self.secs_to_ticks(secs))
    }
}

/// System: advance clock (FixedUpdate, запускается ПЕРВЫМ)
pub fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.tick = clock.tick.wrapping_add(1);
}
