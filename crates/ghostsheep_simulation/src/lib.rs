//! GhostSheep Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 (headless, без рендера)
//!
//! Ядро: агенты ghost/sheep + nearest-target steering + случайная смена режима,
//! collectibles/goal триггеры + общий ScoreLedger.
//!
//! Коллабораторы снаружи (physics, audio, status/haptics, UI) общаются с ядром
//! только через компоненты-выходы (SteeringOutput) и события
//! (ContactEvent внутрь; StatusCommand, FeedbackEvent, ScoreEvent наружу).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::CollisionEvent;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod agent;
pub mod clock;
pub mod components;
pub mod config;
pub mod effects;
pub mod logger;
pub mod motion;
pub mod physics;
pub mod scoring;
pub mod steering;
pub mod targeting;
pub mod timers;
pub mod triggers;

// Re-export базовых типов для удобства
pub use agent::{Agent, AgentMode, AgentPlugin, AwardPoint, ForceModeSwitch, ModeChanged, NearestTarget, SteeringOutput};
pub use clock::SimulationClock;
pub use components::*;
pub use config::{ConfigError, DelayRange, SimulationConfig};
pub use effects::{FeedbackEvent, SoundCue, StatusCommand, StatusEffect};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use physics::ContactEvent;
pub use scoring::{BalancePolicy, ScoreEvent, ScoreLedger, ScoringPlugin};
pub use steering::{compute_steering, SteeringParams};
pub use targeting::{find_nearest, TargetRegistry};
pub use timers::{CollectibleTimers, ModeSwitchTimers};
pub use triggers::{
    ActiveCollectible, Collectible, CollectibleKind, CollectibleStateChanged, GoalKind, GoalVolume, HoldingState,
    ItemTier, TriggerPlugin,
};

/// Фазы одного simulation тика (FixedUpdate), выполняются строго по порядку
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Clock + входящие события от physics
    Input,
    /// Регистрация новых entities (ledger, первые таймеры)
    Setup,
    /// Обработка ContactEvent
    Contacts,
    /// Сработавшие delay-таймеры
    Timers,
    /// Per-agent steering
    Steering,
    /// Начисление очков
    Scoring,
    /// Headless интеграция движения (только без внешней физики)
    Motion,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Читает `SimulationConfig` если он вставлен до plugin, иначе Default.
/// Невалидный config заменяется на Default (с log_error).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let mut config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        // Config, собранный в коде, мог миновать from_toml_str
        if let Err(err) = config.validate() {
            log_error(&format!("SimulationConfig rejected: {}, using defaults", err));
            config = SimulationConfig::default();
        }

        logger::set_log_level(config.log_level);

        app
            // Fixed timestep для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            .insert_resource(SimulationClock::new(config.tick_secs()))
            .init_resource::<ModeSwitchTimers>()
            .init_resource::<CollectibleTimers>()
            .insert_resource(config.clone());

        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(config.seed));
        }

        app.add_event::<ContactEvent>()
            .add_event::<CollisionEvent>()
            .add_event::<StatusCommand>()
            .add_event::<FeedbackEvent>();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Input,
                SimulationSet::Setup,
                SimulationSet::Contacts,
                SimulationSet::Timers,
                SimulationSet::Steering,
                SimulationSet::Scoring,
                SimulationSet::Motion,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (clock::advance_clock, physics::forward_rapier_collisions)
                .chain()
                .in_set(SimulationSet::Input),
        );

        app.add_plugins((ScoringPlugin, AgentPlugin, TriggerPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время продвигается ровно на 1/60 сек за `app.update()` (ManualDuration),
/// так что каждый update после первого = один FixedUpdate тик.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)));

    app
}

/// Headless App + SimulationPlugin с заданным config
pub fn create_simulation_app(config: SimulationConfig) -> App {
    let mut app = create_headless_app(config.seed);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / config.tick_hz,
    )))
    .insert_resource(config)
    .add_plugins(SimulationPlugin);

    app
}

/// Прогнать `ticks` simulation тиков напрямую (без wall-clock накопления Time)
pub fn run_ticks(app: &mut App, ticks: u64) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Snapshot компонентов для сравнения прогонов
pub fn world_snapshot<T: Component + std::fmt::Debug>(world: &mut World) -> Vec<String> {
    let mut query = world.query::<(Entity, &T)>();
    let mut entries: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для стабильного порядка
    entries.sort_by_key(|(entity, _)| entity.index());

    entries
        .into_iter()
        .map(|(entity, component)| format!("{}:{:?}", entity.index(), component))
        .collect()
}
