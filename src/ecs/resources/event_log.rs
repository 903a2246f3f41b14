use bevy_ecs::resource::Resource;

use crate::journal::{EventEffect, EventParticipant, GameEvent};

/// Accumulates journal records for the session; `flush::jsonl` exports them.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
    pub participants: Vec<EventParticipant>,
    pub effects: Vec<EventEffect>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}
