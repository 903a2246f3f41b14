use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::Dead;
use crate::ecs::events::GameReactiveEvent;
use crate::journal::StateChange;

use super::GameCommand;
use super::applicator::ApplyCtx;

/// Kill a crewmate. The entity stays in the world as a corpse; reactions
/// (irremovable-gear drop, sacrifice-target replacement) key off the
/// `CrewDied` event this emits.
pub(crate) fn apply_end_crew(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &GameCommand,
    entity: Entity,
) {
    if world.get_entity(entity).is_err() || world.get::<Dead>(entity).is_some() {
        return;
    }
    world.entity_mut(entity).insert(Dead);

    let event_id = ctx.record_event(cmd);
    ctx.record_effect(event_id, entity, StateChange::Died);
    ctx.emit(GameReactiveEvent::CrewDied { event_id, entity });
}
