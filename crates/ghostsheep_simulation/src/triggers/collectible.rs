//! CollectibleTrigger - подбираемые объекты с респавном
//!
//! Цикл: Inactive → (random delay) → Active в случайной точке арены →
//! contact игрока → эффект + feedback → Inactive (holder = игрок) → ...
//!
//! Active ⇔ есть маркер `ActiveCollectible`. Contact handler читает только
//! `With<ActiveCollectible>`, поэтому неактивный collectible недостижим.

use bevy::prelude::*;

use crate::clock::SimulationClock;
use crate::components::{ArenaPosition, Player};
use crate::config::SimulationConfig;
use crate::effects::{FeedbackEvent, SoundCue, StatusCommand, StatusEffect};
use crate::physics::ContactEvent;
use crate::scoring::ScoreEvent;
use crate::timers::{random_delay_secs, CollectibleTimers};
use crate::triggers::{HoldingState, ItemTier};
use crate::DeterministicRng;

/// Что происходит с игроком при подборе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CollectibleKind {
    /// Gem: переключает игроку способность воровать очки
    StealToken,
    /// Предмет для сдачи в DropOff (кладётся в HoldingState)
    Item(ItemTier),
    /// Очки сразу в ledger
    Points(u32),
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(ArenaPosition)]
pub struct Collectible {
    pub kind: CollectibleKind,
    /// Кто подобрал (None пока active или до первого подбора)
    pub holder: Option<Entity>,
}

impl Collectible {
    pub fn new(kind: CollectibleKind) -> Self {
        Self { kind, holder: None }
    }
}

/// Маркер: collectible активен и принимает contacts
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ActiveCollectible;

/// Event: collectible включён/выключен (для physics/render коллабораторов)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CollectibleStateChanged {
    pub collectible: Entity,
    pub active: bool,
    pub position: Vec2,
}

fn arm_reactivation(
    collectible: Entity,
    timers: &mut CollectibleTimers,
    clock: &SimulationClock,
    config: &SimulationConfig,
    rng: &mut DeterministicRng,
) -> u64 {
    let delay = random_delay_secs(config.collectibles.respawn, &mut rng.rng);
    let due_tick = clock.due_after(delay);
    timers.schedule(collectible, due_tick);
    due_tick
}

/// Система: новые collectibles стартуют неактивными и ждут первую активацию
pub fn deactivate_new_collectibles(
    mut commands: Commands,
    mut collectibles: Query<(Entity, &mut Collectible), Added<Collectible>>,
    clock: Res<SimulationClock>,
    config: Res<SimulationConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut timers: ResMut<CollectibleTimers>,
) {
    for (entity, mut collectible) in collectibles.iter_mut() {
        collectible.holder = None;
        commands.entity(entity).try_remove::<ActiveCollectible>();

        let due_tick = arm_reactivation(entity, &mut timers, &clock, &config, &mut rng);
        crate::log(&format!("Collectible {:?}: first activation at tick {}", entity, due_tick));
    }
}

/// Система: снять таймеры despawned collectibles
pub fn cancel_removed_collectible_timers(
    mut removed: RemovedComponents<Collectible>,
    mut timers: ResMut<CollectibleTimers>,
) {
    for entity in removed.read() {
        timers.cancel(entity);
    }
}

/// Система: игрок коснулся активного collectible
///
/// Эффект по kind → feedback GemCollected → деактивация + таймер реактивации.
pub fn handle_collectible_contacts(
    mut commands: Commands,
    mut contacts: EventReader<ContactEvent>,
    mut collectibles: Query<(Entity, &mut Collectible, &ArenaPosition), With<ActiveCollectible>>,
    mut players: Query<(&Player, &mut HoldingState)>,
    clock: Res<SimulationClock>,
    config: Res<SimulationConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut timers: ResMut<CollectibleTimers>,
    mut status: EventWriter<StatusCommand>,
    mut score: EventWriter<ScoreEvent>,
    mut feedback: EventWriter<FeedbackEvent>,
    mut state_changed: EventWriter<CollectibleStateChanged>,
) {
    for contact in contacts.read() {
        for (collectible_entity, other) in contact.pairs() {
            let Ok((entity, mut collectible, position)) = collectibles.get_mut(collectible_entity) else {
                continue;
            };
            // Уже подобран в этом тике (маркер снимется на sync point)
            if collectible.holder.is_some() {
                continue;
            }
            let Ok((player, mut holding)) = players.get_mut(other) else {
                continue;
            };

            match collectible.kind {
                CollectibleKind::StealToken => {
                    status.write(StatusCommand {
                        target: other,
                        effect: StatusEffect::ToggleStealAbility,
                    });
                }
                CollectibleKind::Item(tier) => {
                    holding.grab_item(tier);
                }
                CollectibleKind::Points(amount) => {
                    score.write(ScoreEvent::credit(player.id, amount));
                }
            }
            feedback.write(FeedbackEvent::new(other, SoundCue::GemCollected));

            collectible.holder = Some(other);
            commands.entity(entity).try_remove::<ActiveCollectible>();
            state_changed.write(CollectibleStateChanged {
                collectible: entity,
                active: false,
                position: position.0,
            });

            let due_tick = arm_reactivation(entity, &mut timers, &clock, &config, &mut rng);
            crate::log(&format!(
                "Player {} collected {:?} ({:?}), respawn at tick {}",
                player.id, entity, collectible.kind, due_tick
            ));
        }
    }
}

/// Система: due collectibles → активировать в случайной точке арены
pub fn activate_due_collectibles(
    mut commands: Commands,
    mut collectibles: Query<(&mut Collectible, &mut ArenaPosition)>,
    clock: Res<SimulationClock>,
    config: Res<SimulationConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut timers: ResMut<CollectibleTimers>,
    mut state_changed: EventWriter<CollectibleStateChanged>,
) {
    while let Some(entity) = timers.pop_due(clock.tick) {
        let Ok((mut collectible, mut position)) = collectibles.get_mut(entity) else {
            continue;
        };

        position.0 = config.collectibles.bounds.random_point(&mut rng.rng);
        collectible.holder = None;
        commands.entity(entity).try_insert(ActiveCollectible);

        state_changed.write(CollectibleStateChanged {
            collectible: entity,
            active: true,
            position: position.0,
        });
        crate::log(&format!("Collectible {:?} active at {:?}", entity, position.0));
    }
}
