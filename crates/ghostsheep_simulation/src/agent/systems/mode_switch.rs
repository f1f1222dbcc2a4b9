//! Mode switch systems (randomized re-arming timer).

use bevy::prelude::*;

use crate::agent::{Agent, AgentMode, ForceModeSwitch, ModeChanged};
use crate::clock::SimulationClock;
use crate::config::SimulationConfig;
use crate::effects::{FeedbackEvent, StatusCommand};
use crate::targeting::TargetRegistry;
use crate::timers::{random_delay_secs, ModeSwitchTimers};
use crate::DeterministicRng;

/// Арм таймера смены режима на случайную задержку из config
fn arm_switch_timer(
    agent: Entity,
    timers: &mut ModeSwitchTimers,
    clock: &SimulationClock,
    config: &SimulationConfig,
    rng: &mut DeterministicRng,
) -> u64 {
    let delay = random_delay_secs(config.mode_switch, &mut rng.rng);
    let due_tick = clock.due_after(delay);
    timers.schedule(agent, due_tick);
    due_tick
}

/// Система: первый таймер для только что заспавненных агентов
pub fn arm_new_agents(
    agents: Query<Entity, Added<Agent>>,
    clock: Res<SimulationClock>,
    config: Res<SimulationConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut timers: ResMut<ModeSwitchTimers>,
) {
    for agent in agents.iter() {
        if timers.is_pending(agent) {
            continue;
        }
        let due_tick = arm_switch_timer(agent, &mut timers, &clock, &config, &mut rng);
        crate::log(&format!("Agent {:?}: first mode switch at tick {}", agent, due_tick));
    }
}

/// Система: снять таймеры despawned агентов
pub fn cancel_removed_agent_timers(
    mut removed: RemovedComponents<Agent>,
    mut timers: ResMut<ModeSwitchTimers>,
) {
    for agent in removed.read() {
        if timers.cancel(agent) {
            crate::log(&format!("Agent {:?} removed: mode switch timer cancelled", agent));
        }
    }
}

/// Система: ForceModeSwitch → таймер агента due прямо сейчас
pub fn apply_forced_switches(
    mut requests: EventReader<ForceModeSwitch>,
    agents: Query<(), With<Agent>>,
    clock: Res<SimulationClock>,
    mut timers: ResMut<ModeSwitchTimers>,
) {
    for request in requests.read() {
        if agents.get(request.agent).is_err() {
            crate::log(&format!("ForceModeSwitch: {:?} is not an agent, skipped", request.agent));
            continue;
        }
        timers.schedule(request.agent, clock.tick);
    }
}

/// Система: сработавшие таймеры → flip режима
///
/// Для каждого due агента:
/// 1. flip AgentMode
/// 2. status broadcast всем живым целям (Pursuer: lock, Evader: clear + assist)
/// 3. FeedbackEvent + ModeChanged
/// 4. re-arm таймера (ровно один pending на агента)
///
/// Агент despawned до срабатывания → no-op.
pub fn run_mode_switches(
    clock: Res<SimulationClock>,
    config: Res<SimulationConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut timers: ResMut<ModeSwitchTimers>,
    mut agents: Query<&mut AgentMode, With<Agent>>,
    targets: TargetRegistry,
    mut status: EventWriter<StatusCommand>,
    mut feedback: EventWriter<FeedbackEvent>,
    mut changed: EventWriter<ModeChanged>,
) {
    while let Some(agent) = timers.pop_due(clock.tick) {
        let Ok(mut mode) = agents.get_mut(agent) else {
            crate::log(&format!("Mode switch: agent {:?} gone, timer dropped", agent));
            continue;
        };

        let new_mode = mode.flipped();
        *mode = new_mode;

        let recipients = targets.entities();
        for &effect in new_mode.entry_effects() {
            for &target in &recipients {
                status.write(StatusCommand { target, effect });
            }
        }

        feedback.write(FeedbackEvent::new(agent, new_mode.entry_cue()));
        changed.write(ModeChanged { agent, mode: new_mode });

        let due_tick = arm_switch_timer(agent, &mut timers, &clock, &config, &mut rng);
        crate::log_info(&format!(
            "Agent {:?} → {:?} (tick {}, {} targets notified, next switch at tick {})",
            agent,
            new_mode,
            clock.tick,
            recipients.len(),
            due_tick
        ));
    }
}
