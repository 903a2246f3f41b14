//! Telepathy: channel-scoped messages delivered as popups.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageReader;
use bevy_ecs::query::Without;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, ResMut};

use crate::ecs::components::{Dead, Telepathy};
use crate::ecs::messages::{TelepathyBroadcast, TelepathySend};
use crate::ecs::resources::Popups;
use crate::ecs::schedule::{FeatureSet, GameTick};

pub struct TelepathyPlugin;

impl Plugin for TelepathyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            (relay_telepathy, relay_broadcasts)
                .chain()
                .in_set(FeatureSet::Telepathy),
        );
    }
}

/// Relay a send to every living listener on the sender's channel, the sender
/// included. Non-senders (and dead senders) are silently dropped.
fn relay_telepathy(
    mut sends: MessageReader<TelepathySend>,
    telepaths: Query<(Entity, &Telepathy), Without<Dead>>,
    mut popups: ResMut<Popups>,
) {
    for msg in sends.read() {
        let Ok((_, sender)) = telepaths.get(msg.sender) else {
            continue;
        };
        if !sender.can_send {
            continue;
        }
        let channel = sender.channel;
        for (listener, telepathy) in telepaths.iter() {
            if telepathy.channel == channel {
                popups.notify(msg.text.clone(), msg.sender, listener);
            }
        }
    }
}

/// Channel-wide announcement with no sender precondition (the summoning
/// completion uses this).
fn relay_broadcasts(
    mut casts: MessageReader<TelepathyBroadcast>,
    telepaths: Query<(Entity, &Telepathy), Without<Dead>>,
    mut popups: ResMut<Popups>,
) {
    for msg in casts.read() {
        for (listener, telepathy) in telepaths.iter() {
            if telepathy.channel == msg.channel {
                popups.notify(msg.text.clone(), listener, listener);
            }
        }
    }
}
