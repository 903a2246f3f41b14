use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

/// Reactive events emitted by the command applicator for cross-feature
/// reactions.
///
/// Each variant carries an `event_id` linking back to the EventLog entry
/// that caused it, enabling causal chain propagation.
#[derive(Message, Clone, Debug)]
pub enum GameReactiveEvent {
    // -- Camera --
    CameraMounted {
        event_id: u64,
        camera: Entity,
        target: Entity,
    },
    CameraUnmounted {
        event_id: u64,
        camera: Entity,
        target: Entity,
    },

    // -- Lifecycle --
    CrewDied {
        event_id: u64,
        entity: Entity,
    },

    // -- Rite --
    VictimSacrificed {
        event_id: u64,
        victim: Entity,
        altar: Entity,
    },
    HeraldSummoned {
        event_id: u64,
        herald: Entity,
    },

    // -- Wardrobe --
    ItemDropped {
        event_id: u64,
        item: Entity,
        owner: Entity,
    },

    // -- Corruption --
    ItemCorrupted {
        event_id: u64,
        item: Entity,
    },
    ItemRestored {
        event_id: u64,
        item: Entity,
    },
}
