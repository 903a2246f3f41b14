pub mod ecs;
pub mod flush;
pub mod id;
pub mod journal;

pub use id::IdGenerator;
pub use journal::{
    EventEffect, EventKind, EventParticipant, GameEvent, ParticipantRole, StateChange,
};
