//! Item-slot helpers: the physical holder for mounted sub-objects.
//!
//! All mutation happens through these functions, called synchronously from
//! the exclusive command applicator; the single-threaded event model means
//! slot contents are never touched concurrently.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::components::{Hands, Item, ItemSlot, ItemSlots, SlotFilter, SlotId};

/// Add a slot with the given filter to `target`, creating the `ItemSlots`
/// component if absent. Overwrites an existing slot with the same ID.
pub fn add_slot(world: &mut World, target: Entity, slot_id: SlotId, filter: SlotFilter) {
    if world.get::<ItemSlots>(target).is_none() {
        world.entity_mut(target).insert(ItemSlots::default());
    }
    let mut slots = world.get_mut::<ItemSlots>(target).expect("just ensured");
    slots.slots.insert(slot_id, ItemSlot::new(filter));
}

/// Remove a slot from `target`; drops the `ItemSlots` component when the
/// last slot goes. A no-op if the slot or component is absent.
pub fn remove_slot(world: &mut World, target: Entity, slot_id: SlotId) {
    let Some(mut slots) = world.get_mut::<ItemSlots>(target) else {
        return;
    };
    slots.slots.remove(&slot_id);
    if slots.slots.is_empty() {
        world.entity_mut(target).remove::<ItemSlots>();
    }
}

/// Set the locked flag on a slot. Locked slots refuse ejection.
pub fn set_locked(world: &mut World, target: Entity, slot_id: SlotId, locked: bool) {
    if let Some(mut slots) = world.get_mut::<ItemSlots>(target)
        && let Some(slot) = slots.slots.get_mut(&slot_id)
    {
        slot.locked = locked;
    }
}

/// Move a specific item from `user`'s hands into the slot. Returns false if
/// the slot is missing or occupied, the filter refuses the item, or the user
/// is not actually holding it.
pub fn insert_from_hands(
    world: &mut World,
    target: Entity,
    slot_id: SlotId,
    user: Entity,
    item: Entity,
) -> bool {
    let filter = match world
        .get::<ItemSlots>(target)
        .and_then(|s| s.slots.get(&slot_id))
    {
        Some(slot) if slot.occupant.is_none() => slot.filter,
        _ => return false,
    };
    let accepted = world
        .get::<Item>(item)
        .is_some_and(|i| filter.accepts(i.kind));
    if !accepted {
        return false;
    }
    let held = world.get::<Hands>(user).is_some_and(|h| h.holds(item));
    if !held {
        return false;
    }

    world
        .get_mut::<Hands>(user)
        .expect("checked above")
        .held
        .retain(|&h| h != item);
    let mut slots = world.get_mut::<ItemSlots>(target).expect("checked above");
    slots.slots.get_mut(&slot_id).expect("checked above").occupant = Some(item);
    true
}

/// Remove and return the slot's occupant, ignoring the lock. Used for forced
/// teardown when ejecting to hands is impossible.
pub fn take_occupant(world: &mut World, target: Entity, slot_id: SlotId) -> Option<Entity> {
    let mut slots = world.get_mut::<ItemSlots>(target)?;
    let slot = slots.slots.get_mut(&slot_id)?;
    slot.occupant.take()
}

/// Eject the slot's occupant into `user`'s hands. Returns false if the slot
/// is missing, empty, or locked, or the user has no hands.
pub fn eject_to_hands(world: &mut World, target: Entity, slot_id: SlotId, user: Entity) -> bool {
    let occupant = match world
        .get::<ItemSlots>(target)
        .and_then(|s| s.slots.get(&slot_id))
    {
        Some(slot) if !slot.locked => slot.occupant,
        _ => return false,
    };
    let Some(item) = occupant else {
        return false;
    };
    let Some(mut hands) = world.get_mut::<Hands>(user) else {
        return false;
    };
    hands.held.push(item);
    let mut slots = world.get_mut::<ItemSlots>(target).expect("checked above");
    slots.slots.get_mut(&slot_id).expect("checked above").occupant = None;
    true
}

/// The entity currently occupying a slot, if any.
pub fn occupant(world: &World, target: Entity, slot_id: SlotId) -> Option<Entity> {
    world
        .get::<ItemSlots>(target)
        .and_then(|s| s.slots.get(&slot_id))
        .and_then(|s| s.occupant)
}
