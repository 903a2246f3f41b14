use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use rand::rngs::SmallRng;

use crate::IdGenerator;
use crate::ecs::components::{ChannelId, OCCULT_CHANNEL};

/// Deterministic RNG for content systems (sacrifice-target selection).
#[derive(Resource)]
pub struct GameRng {
    pub rng: SmallRng,
    pub seed: u64,
}

/// Global ID generator for journal IDs.
#[derive(Resource, Default)]
pub struct GameIds(pub IdGenerator);

/// One delivered popup notification.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupEntry {
    pub text: String,
    pub source: Entity,
    pub recipient: Entity,
}

/// Notification sink. Fire-and-forget: content pushes entries, the host's
/// presentation layer (or a test) drains them.
#[derive(Resource, Debug, Clone, Default)]
pub struct Popups {
    pub entries: Vec<PopupEntry>,
}

impl Popups {
    pub fn notify(&mut self, text: impl Into<String>, source: Entity, recipient: Entity) {
        self.entries.push(PopupEntry {
            text: text.into(),
            source,
            recipient,
        });
    }

    /// Popups delivered to a given recipient, in delivery order.
    pub fn for_recipient(&self, recipient: Entity) -> Vec<&PopupEntry> {
        self.entries
            .iter()
            .filter(|p| p.recipient == recipient)
            .collect()
    }
}

/// Session-wide state of the summoning rule.
///
/// Inserted by the app builder (session start) and dropped with the app
/// (session end) — never ambient global state. The applicator extracts it
/// for every command batch, so it lives with the other core resources even
/// when `RitePlugin` is not installed.
#[derive(Resource, Debug, Clone)]
pub struct SummoningRule {
    pub required_sacrifices: u32,
    pub required_ascended: u32,
    pub sacrifices: u32,
    /// One-shot completion guard. The herald is summoned exactly once even
    /// if sacrifices continue past the threshold; the counter alone is not
    /// the guard because it is never reset.
    pub summoned: bool,
    /// One-shot guard for sacrifice-target selection.
    pub targets_picked: bool,
    pub channel: ChannelId,
}

impl Default for SummoningRule {
    fn default() -> Self {
        Self {
            required_sacrifices: 3,
            required_ascended: 3,
            sacrifices: 0,
            summoned: false,
            targets_picked: false,
            channel: OCCULT_CHANNEL,
        }
    }
}
