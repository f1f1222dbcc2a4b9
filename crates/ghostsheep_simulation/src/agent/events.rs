//! Agent events

use bevy::prelude::*;

use crate::agent::AgentMode;

/// Event: агент сменил режим (для визуалов / UI)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChanged {
    pub agent: Entity,
    pub mode: AgentMode,
}

/// Event: принудительно сменить режим агента в текущем тике
///
/// Идёт через тот же таймер, что и обычная смена (flip + broadcast + re-arm).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForceModeSwitch {
    pub agent: Entity,
}

/// Event: запрос очка за sheep (host/скрипт уровня) - очко ближайшему игроку
///
/// Ring начисляет сам, без этого события.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardPoint {
    pub agent: Entity,
}
