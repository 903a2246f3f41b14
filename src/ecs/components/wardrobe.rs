use std::collections::BTreeMap;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

/// Body slot an item can be worn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WearSlot {
    Head,
    Torso,
    Feet,
    Pocket,
}

/// Clothing currently worn by an entity, keyed by body slot.
/// BTreeMap for deterministic iteration order.
#[derive(Component, Debug, Clone, Default)]
pub struct Wardrobe {
    pub worn: BTreeMap<WearSlot, Entity>,
}

/// Rule data for items that seal themselves onto whoever wears them.
#[derive(Component, Debug, Clone)]
pub struct Irremovable {
    /// Whether the item comes off (and drops beside the body) on death.
    pub drop_on_death: bool,
    /// Whether merely picking the item up seals it, or only wearing it.
    pub applies_in_hands: bool,
}

impl Default for Irremovable {
    fn default() -> Self {
        Self {
            drop_on_death: true,
            applies_in_hands: false,
        }
    }
}

/// The item currently refuses unequip and drop requests.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Sealed;
