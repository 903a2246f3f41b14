use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{Hands, Irremovable, Sealed, Wardrobe, WearSlot};
use crate::ecs::events::GameReactiveEvent;
use crate::ecs::inventory;
use crate::journal::{ParticipantRole, StateChange};

use super::GameCommand;
use super::applicator::ApplyCtx;

/// Bookkeeping: seal an item onto its current carrier.
pub(crate) fn apply_seal(world: &mut World, item: Entity) {
    if world.get_entity(item).is_err() {
        return;
    }
    world.entity_mut(item).insert(Sealed);
}

/// Take an item out of a wear slot and into the wearer's hands. Sealed items
/// refuse: silent no-op.
pub(crate) fn apply_unequip(world: &mut World, wearer: Entity, slot: WearSlot) {
    let Some(wardrobe) = world.get::<Wardrobe>(wearer) else {
        return;
    };
    let Some(&item) = wardrobe.worn.get(&slot) else {
        return;
    };
    if world.get::<Sealed>(item).is_some() {
        return;
    }
    world
        .get_mut::<Wardrobe>(wearer)
        .expect("checked above")
        .worn
        .remove(&slot);
    if let Some(mut hands) = world.get_mut::<Hands>(wearer) {
        hands.held.push(item);
    } else {
        inventory::place_beside(world, wearer, item);
    }
}

/// Drop a held item on the ground. Sealed items refuse: silent no-op.
pub(crate) fn apply_drop(world: &mut World, user: Entity, item: Entity) {
    if world.get::<Sealed>(item).is_some() {
        return;
    }
    let held = world.get::<Hands>(user).is_some_and(|h| h.holds(item));
    if !held {
        return;
    }
    world
        .get_mut::<Hands>(user)
        .expect("checked above")
        .held
        .retain(|&h| h != item);
    inventory::place_beside(world, user, item);
}

/// Forced removal on death: every irremovable item the owner carries with
/// `drop_on_death` is unsealed and dropped beside the body. Items without
/// `drop_on_death` stay on the corpse, sealed.
pub(crate) fn apply_strip(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &GameCommand,
    owner: Entity,
) {
    if world.get_entity(owner).is_err() {
        return;
    }

    let mut carried: Vec<Entity> = Vec::new();
    if let Some(hands) = world.get::<Hands>(owner) {
        carried.extend(hands.held.iter().copied());
    }
    if let Some(wardrobe) = world.get::<Wardrobe>(owner) {
        carried.extend(wardrobe.worn.values().copied());
    }

    let dropping: Vec<Entity> = carried
        .into_iter()
        .filter(|&item| {
            world
                .get::<Irremovable>(item)
                .is_some_and(|irr| irr.drop_on_death)
        })
        .collect();
    if dropping.is_empty() {
        return;
    }

    let event_id = ctx.record_event(cmd);
    for item in dropping {
        world.entity_mut(item).remove::<Sealed>();
        if let Some(mut hands) = world.get_mut::<Hands>(owner) {
            hands.held.retain(|&h| h != item);
        }
        if let Some(mut wardrobe) = world.get_mut::<Wardrobe>(owner) {
            wardrobe.worn.retain(|_, &mut worn| worn != item);
        }
        inventory::place_beside(world, owner, item);

        ctx.record_participant(event_id, item, ParticipantRole::Item);
        ctx.record_effect(
            event_id,
            item,
            StateChange::MarkerRemoved {
                name: "Sealed".into(),
            },
        );
        ctx.emit(GameReactiveEvent::ItemDropped {
            event_id,
            item,
            owner,
        });
    }
}
