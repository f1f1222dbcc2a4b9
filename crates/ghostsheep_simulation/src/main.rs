//! Headless симуляция GhostSheep
//!
//! Запускает Bevy App без рендера: 4 агента, 2 игрока, ring, collectibles.
//! Первый аргумент (опционально) - путь к TOML config.

use bevy::prelude::*;
use ghostsheep_simulation::motion::{HeadlessMotionPlugin, KinematicBody};
use ghostsheep_simulation::*;

const TICK_COUNT: u64 = 1800;

fn load_config() -> SimulationConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimulationConfig::default();
    };

    match SimulationConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            init_logger();
            log_error(&format!("{}, using defaults", err));
            SimulationConfig::default()
        }
    }
}

fn main() {
    let config = load_config();
    let tick_hz = config.tick_hz;
    let steering = config.steering;
    println!(
        "Starting GhostSheep headless simulation (seed: {}, {} Hz)",
        config.seed, tick_hz
    );

    let mut app = create_simulation_app(config);
    app.add_plugins(HeadlessMotionPlugin);

    let world = app.world_mut();
    for (x, z) in [(6.0, -5.0), (22.0, -5.0), (6.0, -16.0), (22.0, -16.0)] {
        world.spawn((
            Agent::bundle(Vec2::new(x, z), AgentMode::Evader, steering),
            KinematicBody::default(),
        ));
    }
    world.spawn((Player::new(1), ArenaPosition::new(10.0, -10.0)));
    world.spawn((Player::new(2), ArenaPosition::new(18.0, -10.0)));
    world.spawn((GoalVolume::new(GoalKind::Ring), ArenaPosition::new(14.0, -10.0)));
    world.spawn(Collectible::new(CollectibleKind::StealToken));
    world.spawn(Collectible::new(CollectibleKind::Item(ItemTier::Tier2)));
    world.spawn((GoalVolume::new(GoalKind::Checkpoint), ArenaPosition::new(4.0, -4.0)));
    world.spawn((GoalVolume::new(GoalKind::DropOff), ArenaPosition::new(24.0, -4.0)));

    let ticks_per_report = (tick_hz.round() as u64).max(1) * 5;
    for tick in 1..=TICK_COUNT {
        run_ticks(&mut app, 1);

        if tick % ticks_per_report == 0 {
            let mut modes = app.world_mut().query::<&AgentMode>();
            let ghosts = modes
                .iter(app.world())
                .filter(|mode| **mode == AgentMode::Pursuer)
                .count();
            println!("Tick {}: {} ghost(s)", tick, ghosts);
        }
    }

    let ledger = app.world().resource::<ScoreLedger>();
    for (player, points) in ledger.iter() {
        println!("{}: {} point(s)", player, points);
    }
    println!("Simulation complete!");
}
