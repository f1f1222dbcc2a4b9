//! Agent integration test
//!
//! Полный SimulationPlugin headless: агенты, игроки, ring.
//!
//! Проверяем:
//! - Steering sheep/ghost относительно ближайшего игрока
//! - Contacts → ScoreLedger (ghost отнимает, sheep в ring начисляет)
//! - Rapier CollisionEvent → ContactEvent bridge

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use ghostsheep_simulation::*;

const EPSILON: f32 = 1e-5;

/// Helper: App без случайных flip'ов в пределах теста (таймеры ~10-20 сек)
fn create_test_app() -> App {
    create_simulation_app(SimulationConfig::default())
}

fn spawn_agent(app: &mut App, x: f32, z: f32, mode: AgentMode) -> Entity {
    app.world_mut()
        .spawn(Agent::bundle(Vec2::new(x, z), mode, SteeringParams::default()))
        .id()
}

fn spawn_player(app: &mut App, id: u32, x: f32, z: f32) -> Entity {
    app.world_mut()
        .spawn((Player::new(id), ArenaPosition::new(x, z)))
        .id()
}

fn steering(app: &App, agent: Entity) -> Vec2 {
    app.world().get::<SteeringOutput>(agent).unwrap().0
}

fn points(app: &App, id: u32) -> i64 {
    app.world().resource::<ScoreLedger>().current_points(PlayerId(id))
}

fn drain<E: Event + Clone>(app: &mut App) -> Vec<E> {
    let mut events = app.world_mut().resource_mut::<Events<E>>();
    let drained: Vec<E> = events.drain().collect();
    drained
}

/// Test: sheep убегает в радиусе, после flip в ghost - преследует
#[test]
fn test_sheep_flees_then_chases_after_flip() {
    let mut app = create_test_app();
    let agent = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Evader);
    spawn_player(&mut app, 1, 3.0, 0.0);

    run_ticks(&mut app, 1);
    let flee = steering(&app, agent);
    assert!((flee - Vec2::new(-1.0, 0.0)).length() < EPSILON, "flee = {:?}", flee);

    app.world_mut().send_event(ForceModeSwitch { agent });
    run_ticks(&mut app, 1);

    assert_eq!(*app.world().get::<AgentMode>(agent).unwrap(), AgentMode::Pursuer);
    let chase = steering(&app, agent);
    assert!((chase - Vec2::new(1.0, 0.0)).length() < EPSILON, "chase = {:?}", chase);
}

/// Test: sheep вне радиуса и агент без целей стоят на месте
#[test]
fn test_zero_steering_out_of_range_or_without_targets() {
    let mut app = create_test_app();
    let lonely = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Pursuer);

    run_ticks(&mut app, 1);
    assert_eq!(steering(&app, lonely), Vec2::ZERO);
    assert_eq!(app.world().get::<NearestTarget>(lonely).unwrap().0, None);

    let sheep = spawn_agent(&mut app, 20.0, 0.0, AgentMode::Evader);
    spawn_player(&mut app, 1, 26.0, 0.0);
    run_ticks(&mut app, 1);

    assert_eq!(steering(&app, sheep), Vec2::ZERO);
}

/// Test: ближайший из трёх игроков (квадраты расстояний 9, 4, 16)
#[test]
fn test_nearest_target_selection() {
    let mut app = create_test_app();
    let agent = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Pursuer);
    spawn_player(&mut app, 1, 3.0, 0.0);
    let closest = spawn_player(&mut app, 2, 0.0, 2.0);
    spawn_player(&mut app, 3, -4.0, 0.0);

    run_ticks(&mut app, 1);

    assert_eq!(app.world().get::<NearestTarget>(agent).unwrap().0, Some(closest));
    assert!((steering(&app, agent) - Vec2::new(0.0, 1.0)).length() < EPSILON);
}

/// Test: ghost касается игрока → -1 (с clamp на нуле), sheep ничего не делает
#[test]
fn test_ghost_contact_debits_player() {
    let mut app = create_test_app();
    let ghost = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Pursuer);
    let sheep = spawn_agent(&mut app, 5.0, 0.0, AgentMode::Evader);
    let player = spawn_player(&mut app, 1, 1.0, 0.0);
    run_ticks(&mut app, 1);

    // Два очка через ScoreEvent, потом ghost контакт
    app.world_mut().send_event(ScoreEvent::credit(PlayerId(1), 2));
    run_ticks(&mut app, 1);
    assert_eq!(points(&app, 1), 2);

    app.world_mut().send_event(ContactEvent::new(ghost, player));
    app.world_mut().send_event(ContactEvent::new(player, sheep));
    run_ticks(&mut app, 1);
    assert_eq!(points(&app, 1), 1);
    assert_eq!(
        drain::<FeedbackEvent>(&mut app),
        vec![FeedbackEvent::new(ghost, SoundCue::LosePoint)]
    );

    for _ in 0..3 {
        app.world_mut().send_event(ContactEvent::new(player, ghost));
        run_ticks(&mut app, 1);
    }
    assert_eq!(points(&app, 1), 0);
}

/// Test: AllowNegative политика пропускает баланс ниже нуля
#[test]
fn test_allow_negative_policy() {
    let mut app = create_simulation_app(SimulationConfig {
        ledger: BalancePolicy::AllowNegative,
        ..default()
    });
    let ghost = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Pursuer);
    let player = spawn_player(&mut app, 7, 1.0, 0.0);
    run_ticks(&mut app, 1);

    app.world_mut().send_event(ContactEvent::new(ghost, player));
    run_ticks(&mut app, 1);

    assert_eq!(points(&app, 7), -1);
}

/// Test: sheep в ring → очко ближайшему игроку; ghost в ring → ничего
#[test]
fn test_ring_awards_nearest_player() {
    let mut app = create_test_app();
    let ring = app
        .world_mut()
        .spawn((GoalVolume::new(GoalKind::Ring), ArenaPosition::new(14.0, -10.0)))
        .id();
    let sheep = spawn_agent(&mut app, 14.0, -10.0, AgentMode::Evader);
    let ghost = spawn_agent(&mut app, 14.0, -10.0, AgentMode::Pursuer);
    spawn_player(&mut app, 1, 10.0, -10.0);
    spawn_player(&mut app, 2, 15.0, -10.0);
    run_ticks(&mut app, 1);

    app.world_mut().send_event(ContactEvent::new(sheep, ring));
    run_ticks(&mut app, 1);
    assert_eq!(points(&app, 1), 0);
    assert_eq!(points(&app, 2), 1);
    assert_eq!(
        drain::<FeedbackEvent>(&mut app),
        vec![FeedbackEvent::new(ring, SoundCue::WinPoint)]
    );

    app.world_mut().send_event(ContactEvent::new(ring, ghost));
    run_ticks(&mut app, 1);
    assert_eq!(points(&app, 2), 1);
    assert!(drain::<FeedbackEvent>(&mut app).is_empty());
}

/// Test: sheep в ring без игроков → no-op, без паники
#[test]
fn test_ring_without_players_is_noop() {
    let mut app = create_test_app();
    let ring = app.world_mut().spawn(GoalVolume::new(GoalKind::Ring)).id();
    let sheep = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Evader);
    run_ticks(&mut app, 1);

    app.world_mut().send_event(ContactEvent::new(sheep, ring));
    run_ticks(&mut app, 1);

    assert!(app.world().resource::<ScoreLedger>().is_empty());
    assert!(drain::<FeedbackEvent>(&mut app).is_empty());
}

/// Test: режим берётся на момент контакта, flip в том же тике не отменяет очко
#[test]
fn test_ring_award_survives_same_tick_flip() {
    let mut app = create_test_app();
    let ring = app.world_mut().spawn(GoalVolume::new(GoalKind::Ring)).id();
    let sheep = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Evader);
    spawn_player(&mut app, 1, 2.0, 0.0);
    run_ticks(&mut app, 1);

    app.world_mut().send_event(ContactEvent::new(sheep, ring));
    app.world_mut().send_event(ForceModeSwitch { agent: sheep });
    run_ticks(&mut app, 1);

    assert_eq!(*app.world().get::<AgentMode>(sheep).unwrap(), AgentMode::Pursuer);
    assert_eq!(points(&app, 1), 1);
    assert_eq!(
        drain::<FeedbackEvent>(&mut app),
        vec![
            FeedbackEvent::new(ring, SoundCue::WinPoint),
            FeedbackEvent::new(sheep, SoundCue::Wolf),
        ]
    );
}

/// Test: ghost в ring, который в этом же тике стал sheep - очка нет
#[test]
fn test_ring_ignores_ghost_flipping_to_sheep() {
    let mut app = create_test_app();
    let ring = app.world_mut().spawn(GoalVolume::new(GoalKind::Ring)).id();
    let ghost = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Pursuer);
    spawn_player(&mut app, 1, 2.0, 0.0);
    run_ticks(&mut app, 1);

    app.world_mut().send_event(ContactEvent::new(ring, ghost));
    app.world_mut().send_event(ForceModeSwitch { agent: ghost });
    run_ticks(&mut app, 1);

    assert_eq!(*app.world().get::<AgentMode>(ghost).unwrap(), AgentMode::Evader);
    assert_eq!(points(&app, 1), 0);
    assert_eq!(
        drain::<FeedbackEvent>(&mut app),
        vec![FeedbackEvent::new(ghost, SoundCue::SheepBleat)]
    );
}

/// Test: внешний AwardPoint - очко ближайшему только за sheep
#[test]
fn test_award_point_request() {
    let mut app = create_test_app();
    let sheep = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Evader);
    let ghost = spawn_agent(&mut app, 20.0, 0.0, AgentMode::Pursuer);
    spawn_player(&mut app, 1, 1.0, 0.0);
    spawn_player(&mut app, 2, 19.0, 0.0);
    run_ticks(&mut app, 1);

    app.world_mut().send_event(AwardPoint { agent: sheep });
    app.world_mut().send_event(AwardPoint { agent: ghost });
    run_ticks(&mut app, 1);

    assert_eq!(points(&app, 1), 1);
    assert_eq!(points(&app, 2), 0);
    assert_eq!(
        drain::<FeedbackEvent>(&mut app),
        vec![FeedbackEvent::new(sheep, SoundCue::WinPoint)]
    );
}

/// Test: config в обход from_toml_str (NaN задержки) заменяется на Default без паники
#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let mut app = create_simulation_app(SimulationConfig {
        mode_switch: DelayRange::new(f32::NAN, f32::NAN),
        ..default()
    });
    let agent = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Evader);

    run_ticks(&mut app, 1);

    assert_eq!(app.world().resource::<SimulationConfig>().mode_switch, DelayRange::default());
    assert!(app.world().resource::<ModeSwitchTimers>().is_pending(agent));
}

/// Test: contact с уже despawned entity молча пропускается
#[test]
fn test_stale_contact_is_skipped() {
    let mut app = create_test_app();
    let ghost = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Pursuer);
    let player = spawn_player(&mut app, 1, 1.0, 0.0);
    run_ticks(&mut app, 1);

    app.world_mut().send_event(ContactEvent::new(ghost, player));
    app.world_mut().despawn(ghost);
    run_ticks(&mut app, 1);

    assert_eq!(points(&app, 1), 0);
    assert!(drain::<FeedbackEvent>(&mut app).is_empty());
}

/// Test: Rapier CollisionEvent::Started доходит до contact handlers
#[test]
fn test_rapier_collision_bridge() {
    let mut app = create_simulation_app(SimulationConfig {
        ledger: BalancePolicy::AllowNegative,
        ..default()
    });
    let ghost = spawn_agent(&mut app, 0.0, 0.0, AgentMode::Pursuer);
    let player = spawn_player(&mut app, 1, 1.0, 0.0);
    run_ticks(&mut app, 1);

    app.world_mut()
        .send_event(CollisionEvent::Started(player, ghost, CollisionEventFlags::empty()));
    app.world_mut()
        .send_event(CollisionEvent::Stopped(player, ghost, CollisionEventFlags::empty()));
    run_ticks(&mut app, 1);

    // Stopped игнорируется
    assert_eq!(points(&app, 1), -1);
}
