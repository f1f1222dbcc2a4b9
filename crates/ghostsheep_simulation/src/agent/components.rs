//! Agent компоненты: Agent, AgentMode, SteeringOutput, NearestTarget

use bevy::prelude::*;

use crate::components::ArenaPosition;
use crate::effects::{SoundCue, StatusEffect};
use crate::steering::SteeringParams;

/// Автономный агент (ghost/sheep)
///
/// Автоматически добавляет режим, позицию, steering параметры и выходы через Required Components.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(AgentMode, ArenaPosition, SteeringParams, SteeringOutput, NearestTarget)]
pub struct Agent;

impl Agent {
    /// Полный набор компонентов агента со steering параметрами из config
    pub fn bundle(position: Vec2, mode: AgentMode, params: SteeringParams) -> impl Bundle {
        (Agent, ArenaPosition(position), mode, params)
    }
}

/// Режим поведения агента
///
/// Ровно одно значение на агента; смена - всегда полный flip.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[reflect(Component)]
pub enum AgentMode {
    /// Sheep - убегает от ближайшего игрока, приносит очки в ring
    #[default]
    Evader,
    /// Ghost - преследует ближайшего игрока, отнимает очки при контакте
    Pursuer,
}

impl AgentMode {
    pub fn flipped(self) -> Self {
        match self {
            AgentMode::Evader => AgentMode::Pursuer,
            AgentMode::Pursuer => AgentMode::Evader,
        }
    }

    pub fn is_sheep(self) -> bool {
        self == AgentMode::Evader
    }

    /// Status эффекты, которые рассылаются всем целям при входе в этот режим
    pub fn entry_effects(self) -> &'static [StatusEffect] {
        match self {
            AgentMode::Pursuer => &[StatusEffect::LockMovement],
            AgentMode::Evader => &[StatusEffect::ClearEffects, StatusEffect::RestoreMovementAssist],
        }
    }

    /// Звук при входе в этот режим
    pub fn entry_cue(self) -> SoundCue {
        match self {
            AgentMode::Pursuer => SoundCue::Wolf,
            AgentMode::Evader => SoundCue::SheepBleat,
        }
    }
}

/// Выход steering на текущий тик (ускорение, X/Z)
///
/// Читается physics коллаборатором; ядро его не интегрирует.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SteeringOutput(pub Vec2);

/// Ближайшая цель, найденная в этом тике (перезаписывается каждый тик)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NearestTarget(pub Option<Entity>);
