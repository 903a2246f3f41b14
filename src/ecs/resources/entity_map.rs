use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// Bidirectional mapping between stable journal IDs (u64) and Bevy entities.
///
/// The journal only ever references entities by stable ID, so records stay
/// meaningful after the referenced entity is despawned.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameEntityMap {
    to_bevy: BTreeMap<u64, Entity>,
    to_id: BTreeMap<Entity, u64>,
}

impl GameEntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Panics if the ID is already registered.
    pub fn insert(&mut self, id: u64, entity: Entity) {
        let prev = self.to_bevy.insert(id, entity);
        assert!(prev.is_none(), "duplicate id {id} in GameEntityMap");
        self.to_id.insert(entity, id);
    }

    /// Look up a Bevy entity by journal ID.
    pub fn get_entity(&self, id: u64) -> Option<Entity> {
        self.to_bevy.get(&id).copied()
    }

    /// Look up a journal ID by Bevy entity.
    pub fn get_id(&self, entity: Entity) -> Option<u64> {
        self.to_id.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}
