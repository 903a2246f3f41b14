use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Game clock resource tracking elapsed ticks.
///
/// One tick is one second of station time. The `advance_clock` system moves
/// the clock forward at the end of each tick (in `TickPhase::Last`), so
/// systems see the current time before it advances.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GameClock {
    pub tick_count: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds of station time elapsed since session start.
    pub fn secs(&self) -> u64 {
        self.tick_count
    }

    pub fn advance(&mut self) {
        self.tick_count += 1;
    }
}

/// Bevy system that advances the game clock by one second.
/// Registered in `TickPhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<GameClock>) {
    clock.advance();
}
