pub mod applicator;
mod apply_camera;
mod apply_items;
mod apply_lifecycle;
mod apply_rite;
mod apply_wardrobe;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::ecs::components::wardrobe::WearSlot;
use crate::journal::{EventKind, ParticipantRole};

pub use applicator::apply_game_commands;

/// A command describing an intended state change.
///
/// Systems emit these via `MessageWriter<GameCommand>`. The centralized
/// applicator in `TickPhase::PostUpdate` processes them: it re-validates
/// against the live world (the authoritative check-and-mutate step), applies
/// the change, records the journal entry, and emits `GameReactiveEvent`
/// messages. A command that fails re-validation is a silent no-op: no
/// journal entry, no popup.
#[derive(Message, Clone, Debug)]
pub struct GameCommand {
    /// The intent — what state change to apply.
    pub kind: GameCommandKind,
    /// Human-readable description for the EventLog.
    pub description: String,
    /// Causal chain: event_id of the event that triggered this command.
    pub caused_by: Option<u64>,
    /// What EventKind to record in the EventLog (ignored for bookkeeping commands).
    pub event_kind: EventKind,
    /// Entities involved and their roles.
    pub participants: Vec<(Entity, ParticipantRole)>,
    /// Structured metadata for the event's data field.
    pub event_data: serde_json::Value,
    /// If true, no event entry is recorded (only effects).
    bookkeeping: bool,
}

impl GameCommand {
    /// Create a command that records a full event in the log when applied.
    pub fn new(
        kind: GameCommandKind,
        event_kind: EventKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            caused_by: None,
            event_kind,
            participants: Vec::new(),
            event_data: serde_json::Value::Null,
            bookkeeping: false,
        }
    }

    /// Create a bookkeeping-only command (no event entry, only effects).
    pub fn bookkeeping(kind: GameCommandKind) -> Self {
        Self {
            kind,
            description: String::new(),
            caused_by: None,
            // Unused for bookkeeping, but needs a value
            event_kind: EventKind::Custom("bookkeeping".to_string()),
            participants: Vec::new(),
            event_data: serde_json::Value::Null,
            bookkeeping: true,
        }
    }

    /// Whether this command is bookkeeping-only (no event entry).
    pub fn is_bookkeeping(&self) -> bool {
        self.bookkeeping
    }

    /// Set the causal chain event_id.
    pub fn caused_by(mut self, event_id: u64) -> Self {
        self.caused_by = Some(event_id);
        self
    }

    /// Add a participant.
    pub fn with_participant(mut self, entity: Entity, role: ParticipantRole) -> Self {
        self.participants.push((entity, role));
        self
    }

    /// Set the event data.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.event_data = data;
        self
    }
}

/// All state-change intents, organized by feature.
#[derive(Clone, Debug)]
pub enum GameCommandKind {
    // -- Camera --
    MountCamera {
        camera: Entity,
        target: Entity,
        user: Entity,
    },
    UnmountCamera {
        camera: Entity,
        target: Entity,
        user: Entity,
    },

    // -- Lifecycle --
    EndCrew {
        entity: Entity,
    },

    // -- Rite --
    SacrificeVictim {
        victim: Entity,
        altar: Entity,
        user: Entity,
    },
    AssignSacrificeTarget {
        entity: Entity,
        tier: u8,
    },
    ClearSacrificeTarget {
        entity: Entity,
    },

    // -- Wardrobe --
    SealItem {
        item: Entity,
    },
    UnequipItem {
        wearer: Entity,
        slot: WearSlot,
    },
    DropItem {
        user: Entity,
        item: Entity,
    },
    StripIrremovable {
        owner: Entity,
    },

    // -- Corruption --
    CorruptItem {
        item: Entity,
    },
    RestoreItem {
        item: Entity,
    },
}
