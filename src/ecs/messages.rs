//! Host-delivered interaction messages.
//!
//! These are the inputs the host would dispatch from player actions. Tests
//! (and any embedding runtime) write them into the corresponding
//! `Messages<T>` buffer; feature systems read them during `TickPhase::Update`.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use super::components::ChannelId;
use super::components::wardrobe::WearSlot;

/// A user used a held item on a target ("after-interact").
/// Range checking is the host's job; it arrives as `can_reach`.
#[derive(Message, Clone, Copy, Debug)]
pub struct InteractUsing {
    pub user: Entity,
    pub item: Entity,
    pub target: Entity,
    pub can_reach: bool,
}

/// A user invoked the detach verb on a mounted camera.
#[derive(Message, Clone, Copy, Debug)]
pub struct UnmountVerb {
    pub user: Entity,
    pub camera: Entity,
    pub target: Entity,
}

/// A cultist started the sacrifice rite at an altar.
#[derive(Message, Clone, Copy, Debug)]
pub struct BeginSacrifice {
    pub user: Entity,
    pub altar: Entity,
}

/// An item was equipped into a wear slot (emitted by `inventory::equip`).
#[derive(Message, Clone, Copy, Debug)]
pub struct ItemEquipped {
    pub wearer: Entity,
    pub item: Entity,
    pub slot: WearSlot,
}

/// An item was picked up into hands (emitted by `inventory::pickup`).
#[derive(Message, Clone, Copy, Debug)]
pub struct ItemPickedUp {
    pub user: Entity,
    pub item: Entity,
}

/// A telepathic message from a single sender to its channel.
#[derive(Message, Clone, Debug)]
pub struct TelepathySend {
    pub sender: Entity,
    pub text: String,
}

/// A channel-wide announcement with no sender precondition.
#[derive(Message, Clone, Debug)]
pub struct TelepathyBroadcast {
    pub channel: ChannelId,
    pub text: String,
}
