use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::clock::GameClock;
use super::commands::{GameCommand, apply_game_commands};
use super::events::GameReactiveEvent;
use super::messages::{
    BeginSacrifice, InteractUsing, ItemEquipped, ItemPickedUp, TelepathyBroadcast, TelepathySend,
    UnmountVerb,
};
use super::resources::{EventLog, GameEntityMap, GameIds, GameRng, Popups, SummoningRule};
use super::schedule::{TickPhase, configure_game_schedule};
use super::timed::{TimedActionFinished, TimedActionQueue, expire_timed_actions};

/// Build a headless Bevy app with the game clock, core resources, message
/// types, and the command applicator.
///
/// Manual tick control:
/// ```no_run
/// # use station_content::ecs::{build_game_app, GameTick};
/// let mut app = build_game_app();
/// for _ in 0..60 {  // one minute of second-level ticks
///     app.world_mut().run_schedule(GameTick);
/// }
/// ```
pub fn build_game_app() -> App {
    build_game_app_seeded(42)
}

/// Build a headless Bevy app with a specific RNG seed and multi-threaded executor.
pub fn build_game_app_seeded(seed: u64) -> App {
    build_game_app_with_executor(seed, ExecutorKind::MultiThreaded)
}

/// Build a headless Bevy app with single-threaded executor, matching the
/// original host's serialized event handling. Use this when exact in-phase
/// system order must be identical across runs.
pub fn build_game_app_deterministic(seed: u64) -> App {
    build_game_app_with_executor(seed, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_game_app_with_executor(seed: u64, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(GameClock::new());
    app.insert_resource(EventLog::new());
    app.insert_resource(GameIds::default());
    app.insert_resource(GameEntityMap::new());
    app.insert_resource(TimedActionQueue::default());
    app.insert_resource(Popups::default());
    app.insert_resource(SummoningRule::default());
    app.insert_resource(GameRng {
        rng: SmallRng::seed_from_u64(seed),
        seed,
    });

    // Register message types
    MessageRegistry::register_message::<GameCommand>(app.world_mut());
    MessageRegistry::register_message::<GameReactiveEvent>(app.world_mut());
    MessageRegistry::register_message::<TimedActionFinished>(app.world_mut());
    MessageRegistry::register_message::<InteractUsing>(app.world_mut());
    MessageRegistry::register_message::<UnmountVerb>(app.world_mut());
    MessageRegistry::register_message::<BeginSacrifice>(app.world_mut());
    MessageRegistry::register_message::<ItemEquipped>(app.world_mut());
    MessageRegistry::register_message::<ItemPickedUp>(app.world_mut());
    MessageRegistry::register_message::<TelepathySend>(app.world_mut());
    MessageRegistry::register_message::<TelepathyBroadcast>(app.world_mut());

    // Build schedule with message rotation + timed-action expiry + applicator
    let mut schedule = configure_game_schedule(executor);
    schedule.add_systems(
        (bevy_ecs::message::message_update_system, expire_timed_actions)
            .chain()
            .in_set(TickPhase::PreUpdate),
    );
    schedule.add_systems(apply_game_commands.in_set(TickPhase::PostUpdate));
    app.add_schedule(schedule);
    app
}
