//! Irremovable clothing rule.
//!
//! Wearing an irremovable item (anywhere but a pocket) seals it onto the
//! wearer; picking one up seals it only when the item applies in hands.
//! Sealed items refuse unequip/drop — the applicator no-ops those commands.
//! On death, sealed gear with `drop_on_death` comes loose beside the body.

use bevy_app::{App, Plugin};
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::{Has, With};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::Query;

use crate::ecs::commands::{GameCommand, GameCommandKind};
use crate::ecs::components::{Crew, GameEntity, Irremovable, Sealed, WearSlot};
use crate::ecs::events::GameReactiveEvent;
use crate::ecs::messages::{ItemEquipped, ItemPickedUp};
use crate::ecs::schedule::{FeatureSet, GameTick, TickPhase};
use crate::journal::{EventKind, ParticipantRole};

use super::name_of;

pub struct WardrobePlugin;

impl Plugin for WardrobePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(GameTick, seal_irremovable.in_set(FeatureSet::Wardrobe));
        app.add_systems(
            GameTick,
            drop_irremovable_on_death.in_set(TickPhase::Reactions),
        );
    }
}

/// Seal irremovable items as they are worn or picked up. Pocket slots never
/// seal — a pocketed item is not worn.
fn seal_irremovable(
    mut equips: MessageReader<ItemEquipped>,
    mut pickups: MessageReader<ItemPickedUp>,
    items: Query<(&Irremovable, Has<Sealed>)>,
    mut commands: MessageWriter<GameCommand>,
) {
    for msg in equips.read() {
        if msg.slot == WearSlot::Pocket {
            continue;
        }
        if let Ok((_, already_sealed)) = items.get(msg.item)
            && !already_sealed
        {
            commands.write(GameCommand::bookkeeping(GameCommandKind::SealItem {
                item: msg.item,
            }));
        }
    }
    for msg in pickups.read() {
        if let Ok((irremovable, already_sealed)) = items.get(msg.item)
            && irremovable.applies_in_hands
            && !already_sealed
        {
            commands.write(GameCommand::bookkeeping(GameCommandKind::SealItem {
                item: msg.item,
            }));
        }
    }
}

/// Reaction: when a crewmate dies, force their droppable irremovable gear
/// off the body. The command applies next tick.
fn drop_irremovable_on_death(
    mut events: MessageReader<GameReactiveEvent>,
    crew: Query<&GameEntity, With<Crew>>,
    mut commands: MessageWriter<GameCommand>,
) {
    for event in events.read() {
        let GameReactiveEvent::CrewDied { event_id, entity } = event else {
            continue;
        };
        // Only crew carry gear worth stripping.
        if crew.get(*entity).is_err() {
            continue;
        }
        commands.write(
            GameCommand::new(
                GameCommandKind::StripIrremovable { owner: *entity },
                EventKind::Dropped,
                format!("{}'s sealed gear came loose", name_of(&crew, *entity)),
            )
            .caused_by(*event_id)
            .with_participant(*entity, ParticipantRole::Subject),
        );
    }
}
