//! Outbound события для коллабораторов (status / audio)
//!
//! Ядро не трогает чужие компоненты напрямую: оно пишет команды,
//! а host (движок, robot bridge, audio) их исполняет.

use bevy::prelude::*;

/// Status эффект, применяемый к цели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum StatusEffect {
    /// Заблокировать движение цели (ghost охотится)
    LockMovement,
    /// Снять все haptic/status эффекты
    ClearEffects,
    /// Вернуть обычный movement assist (backdrive)
    RestoreMovementAssist,
    /// Переключить способность воровать очки (gem pickup)
    ToggleStealAbility,
}

/// Команда status коллаборатору
///
/// Idempotent на стороне получателя; если target уже despawned - игнорируется.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct StatusCommand {
    pub target: Entity,
    pub effect: StatusEffect,
}

/// Символические имена звуков (audio коллаборатор сам грузит клип)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SoundCue {
    /// Агент стал ghost
    Wolf,
    /// Агент стал sheep
    SheepBleat,
    /// Ghost поймал игрока
    LosePoint,
    /// Очко заработано
    WinPoint,
    /// Подобран collectible
    GemCollected,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Wolf => "wolf",
            SoundCue::SheepBleat => "Sheep-Lamb-Bah",
            SoundCue::LosePoint => "LosePoint",
            SoundCue::WinPoint => "winPoint",
            SoundCue::GemCollected => "GemCollected",
        }
    }
}

/// Feedback событие (звук/индикация) от entity-источника
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FeedbackEvent {
    pub source: Entity,
    pub cue: SoundCue,
}

impl FeedbackEvent {
    pub fn new(source: Entity, cue: SoundCue) -> Self {
        Self { source, cue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_cue_names() {
        assert_eq!(SoundCue::Wolf.as_str(), "wolf");
        assert_eq!(SoundCue::SheepBleat.as_str(), "Sheep-Lamb-Bah");
        assert_eq!(SoundCue::LosePoint.as_str(), "LosePoint");
        assert_eq!(SoundCue::WinPoint.as_str(), "winPoint");
        assert_eq!(SoundCue::GemCollected.as_str(), "GemCollected");
    }
}
