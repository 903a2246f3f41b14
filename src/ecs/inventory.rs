//! Hands and wardrobe helpers.
//!
//! `equip` and `pickup` stand in for the host's inventory interactions: they
//! move the item and emit the corresponding message so rule systems (the
//! irremovable-clothing rule in particular) can react. Removal goes the
//! other way — through `UnequipItem`/`DropItem` commands — so the applicator
//! can refuse sealed items.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use super::components::{Hands, Position, Wardrobe, WearSlot};
use super::messages::{ItemEquipped, ItemPickedUp};

/// Equip `item` into a wear slot on `wearer`. Returns false if the wearer
/// has no wardrobe or the slot is taken. Emits `ItemEquipped` on success.
pub fn equip(world: &mut World, wearer: Entity, slot: WearSlot, item: Entity) -> bool {
    let Some(mut wardrobe) = world.get_mut::<Wardrobe>(wearer) else {
        return false;
    };
    if wardrobe.worn.contains_key(&slot) {
        return false;
    }
    wardrobe.worn.insert(slot, item);
    // Equipping from hands empties the hand
    if let Some(mut hands) = world.get_mut::<Hands>(wearer) {
        hands.held.retain(|&h| h != item);
    }
    if let Some(mut messages) = world.get_resource_mut::<Messages<ItemEquipped>>() {
        messages.write(ItemEquipped { wearer, item, slot });
    }
    true
}

/// Pick `item` up into `user`'s hands. Returns false if the user has no
/// hands or already holds the item. Emits `ItemPickedUp` on success.
pub fn pickup(world: &mut World, user: Entity, item: Entity) -> bool {
    let Some(mut hands) = world.get_mut::<Hands>(user) else {
        return false;
    };
    if hands.holds(item) {
        return false;
    }
    hands.held.push(item);
    if let Some(mut messages) = world.get_resource_mut::<Messages<ItemPickedUp>>() {
        messages.write(ItemPickedUp { user, item });
    }
    true
}

/// Place `item` on the ground beside `owner` (or at the owner's spot when
/// the owner has no position).
pub fn place_beside(world: &mut World, owner: Entity, item: Entity) {
    let spot = world
        .get::<Position>(owner)
        .map(|p| p.beside())
        .unwrap_or_default();
    world.entity_mut(item).insert(spot);
}
