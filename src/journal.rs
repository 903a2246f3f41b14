//! Serializable journal records.
//!
//! The command applicator appends these to the `EventLog` resource as the
//! audit trail of everything that happened during a session; `flush::jsonl`
//! exports them for post-round analysis.

use serde::{Deserialize, Serialize};

/// What category of happening an event records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Mounted,
    Unmounted,
    Sacrifice,
    Summoning,
    Death,
    Dropped,
    Corruption,
    Restoration,
    Custom(String),
}

/// Role an entity played in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Actor,
    Target,
    Item,
    Victim,
    Subject,
}

/// One journaled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: u64,
    pub kind: EventKind,
    /// Tick the event was applied on (one tick = one second of station time).
    pub tick: u64,
    pub description: String,
    /// Causal chain: event_id of the event that triggered this one.
    pub caused_by: Option<u64>,
    /// Structured metadata.
    pub data: serde_json::Value,
}

/// Links an entity (by stable journal ID) to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParticipant {
    pub event_id: u64,
    pub entity_id: u64,
    pub role: ParticipantRole,
}

/// A per-entity state change recorded against an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEffect {
    pub event_id: u64,
    pub entity_id: u64,
    pub effect: StateChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateChange {
    MarkerAdded {
        name: String,
    },
    MarkerRemoved {
        name: String,
    },
    FieldChanged {
        field: String,
        old_value: serde_json::Value,
        new_value: serde_json::Value,
    },
    Spawned {
        name: String,
    },
    Died,
}
