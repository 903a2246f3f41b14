//! Typed spawn helpers. Every entity gets a `GameEntity` identity and is
//! registered in the `GameEntityMap` so the journal can reference it by
//! stable ID.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::components::{
    Crew, CrewRole, GameEntity, Hands, Item, ItemKind, Mountable, Position, SacrificialAltar,
    SpyCamera, Wardrobe,
};
use super::resources::GameEntityMap;

fn register(world: &mut World, id: u64, entity: Entity) {
    // Graceful when GameEntityMap is temporarily removed from the world
    // (during apply_game_commands, which extracts it into ApplyCtx). In that
    // case the apply_* functions register via ctx.entity_map.insert() instead.
    if let Some(mut map) = world.get_resource_mut::<GameEntityMap>() {
        map.insert(id, entity);
    }
}

/// Spawn a crewmate with empty hands and wardrobe. Feature markers
/// (`Cultist`, `Ascended`, `Telepathy`, …) are inserted by the caller.
pub fn spawn_crew(
    world: &mut World,
    id: u64,
    name: String,
    role: CrewRole,
    position: Position,
) -> Entity {
    let entity = world
        .spawn((
            GameEntity { id, name },
            Crew,
            role,
            Hands::default(),
            Wardrobe::default(),
            position,
        ))
        .id();
    register(world, id, entity);
    entity
}

/// Spawn a bare item of the given kind.
pub fn spawn_item(world: &mut World, id: u64, name: String, kind: ItemKind) -> Entity {
    let entity = world.spawn((GameEntity { id, name }, Item { kind })).id();
    register(world, id, entity);
    entity
}

/// Spawn a spy camera gadget with default delays.
pub fn spawn_camera(world: &mut World, id: u64, name: String) -> Entity {
    let entity = world
        .spawn((
            GameEntity { id, name },
            Item {
                kind: ItemKind::Camera,
            },
            SpyCamera::default(),
        ))
        .id();
    register(world, id, entity);
    entity
}

/// Spawn a fixture that accepts a mounted camera.
pub fn spawn_fixture(world: &mut World, id: u64, name: String, position: Position) -> Entity {
    let entity = world
        .spawn((GameEntity { id, name }, Mountable, position))
        .id();
    register(world, id, entity);
    entity
}

/// Spawn an unused sacrificial altar.
pub fn spawn_altar(world: &mut World, id: u64, name: String, position: Position) -> Entity {
    let entity = world
        .spawn((GameEntity { id, name }, SacrificialAltar::default(), position))
        .id();
    register(world, id, entity);
    entity
}
