use std::collections::BTreeMap;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

/// What kind of item an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemKind {
    Camera,
    Armor,
    Jumpsuit,
    Boots,
    Medkit,
    Tome,
    CorruptedMedkit,
    CorruptedTome,
}

impl ItemKind {
    /// The corrupted counterpart of this kind, if one exists.
    /// Kinds without a counterpart cannot be corrupted.
    pub fn corrupted_counterpart(self) -> Option<ItemKind> {
        match self {
            ItemKind::Medkit => Some(ItemKind::CorruptedMedkit),
            ItemKind::Tome => Some(ItemKind::CorruptedTome),
            _ => None,
        }
    }
}

/// Item state — one component per item entity.
#[derive(Component, Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
}

/// Marks an item as corrupted and records what it was.
/// The original kind is required to reverse the corruption.
#[derive(Component, Debug, Clone, Copy)]
pub struct Corrupted {
    pub original: ItemKind,
}

/// Identifier of a physical item slot on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub &'static str);

/// Restricts what an item slot will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotFilter {
    Any,
    OfKind(ItemKind),
}

impl SlotFilter {
    pub fn accepts(self, kind: ItemKind) -> bool {
        match self {
            SlotFilter::Any => true,
            SlotFilter::OfKind(k) => k == kind,
        }
    }
}

/// A single item slot: at most one occupant, lockable against ejection.
#[derive(Debug, Clone)]
pub struct ItemSlot {
    pub occupant: Option<Entity>,
    pub locked: bool,
    pub filter: SlotFilter,
}

impl ItemSlot {
    pub fn new(filter: SlotFilter) -> Self {
        Self {
            occupant: None,
            locked: false,
            filter,
        }
    }
}

/// Physical item slots on an entity, keyed by slot ID.
/// BTreeMap for deterministic iteration order.
#[derive(Component, Debug, Clone, Default)]
pub struct ItemSlots {
    pub slots: BTreeMap<SlotId, ItemSlot>,
}

/// Items currently held in an entity's hands.
#[derive(Component, Debug, Clone, Default)]
pub struct Hands {
    pub held: Vec<Entity>,
}

impl Hands {
    pub fn holds(&self, item: Entity) -> bool {
        self.held.contains(&item)
    }
}
