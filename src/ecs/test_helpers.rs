use bevy_app::App;
use bevy_ecs::message::{Message, Messages};

use crate::ecs::schedule::GameTick;

/// Run a single game tick (one second of station time).
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(GameTick);
}

/// Run `n` seconds worth of ticks.
pub fn tick_secs(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(GameTick);
    }
}

/// Inject a host-style message; systems read it on the next tick.
pub fn send_message<M: Message>(app: &mut App, message: M) {
    app.world_mut().resource_mut::<Messages<M>>().write(message);
}
