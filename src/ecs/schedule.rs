use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for the main game tick.
/// Run manually each tick via `app.world_mut().run_schedule(GameTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameTick;

/// Ordered phases within each game tick.
///
/// Systems are assigned to phases via `.in_set(TickPhase::Update)` etc.
/// Phases run in declaration order: PreUpdate < Update < PostUpdate < Reactions < Last.
///
/// PreUpdate rotates message buffers and expires timed actions; Update runs
/// the feature systems; PostUpdate runs the exclusive command applicator;
/// Reactions consumes reactive events (commands written there apply next
/// tick); Last advances the clock.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Reactions,
    Last,
}

/// Per-feature system sets within `TickPhase::Update`.
///
/// Features are independent — no cross-feature ordering is imposed. Bevy
/// schedules them based on data access (parallel if disjoint, serialized if
/// conflicting); the single-threaded executor serializes them in insertion
/// order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureSet {
    Camera,
    Rite,
    Wardrobe,
    Telepathy,
}

/// Build a configured `GameTick` schedule with phase ordering.
pub fn configure_game_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(GameTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            TickPhase::PreUpdate,
            TickPhase::Update,
            TickPhase::PostUpdate,
            TickPhase::Reactions,
            TickPhase::Last,
        )
            .chain(),
    );
    schedule.configure_sets(FeatureSet::Camera.in_set(TickPhase::Update));
    schedule.configure_sets(FeatureSet::Rite.in_set(TickPhase::Update));
    schedule.configure_sets(FeatureSet::Wardrobe.in_set(TickPhase::Update));
    schedule.configure_sets(FeatureSet::Telepathy.in_set(TickPhase::Update));
    schedule.add_systems(advance_clock.in_set(TickPhase::Last));
    schedule
}
