use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{Corrupted, Item};
use crate::ecs::events::GameReactiveEvent;
use crate::journal::StateChange;

use super::GameCommand;
use super::applicator::ApplyCtx;

/// Swap an item's kind for its corrupted counterpart and stamp `Corrupted`.
/// Items with no counterpart, or already corrupted, are ignored.
pub(crate) fn apply_corrupt(ctx: &mut ApplyCtx, world: &mut World, cmd: &GameCommand, item: Entity) {
    if world.get::<Corrupted>(item).is_some() {
        return;
    }
    let Some(original) = world.get::<Item>(item).map(|i| i.kind) else {
        return;
    };
    let Some(counterpart) = original.corrupted_counterpart() else {
        return;
    };

    world.get_mut::<Item>(item).expect("checked above").kind = counterpart;
    world.entity_mut(item).insert(Corrupted { original });

    let event_id = ctx.record_event(cmd);
    ctx.record_effect(
        event_id,
        item,
        StateChange::FieldChanged {
            field: "kind".into(),
            old_value: serde_json::json!(format!("{original:?}")),
            new_value: serde_json::json!(format!("{counterpart:?}")),
        },
    );
    ctx.record_effect(
        event_id,
        item,
        StateChange::MarkerAdded {
            name: "Corrupted".into(),
        },
    );
    ctx.emit(GameReactiveEvent::ItemCorrupted { event_id, item });
}

/// Revert a corrupted item from its stored original kind and remove the
/// marker. A no-op on uncorrupted items.
pub(crate) fn apply_restore(ctx: &mut ApplyCtx, world: &mut World, cmd: &GameCommand, item: Entity) {
    let Some(corrupted) = world.get::<Corrupted>(item).copied() else {
        return;
    };
    let Some(current) = world.get::<Item>(item).map(|i| i.kind) else {
        return;
    };

    world.get_mut::<Item>(item).expect("checked above").kind = corrupted.original;
    world.entity_mut(item).remove::<Corrupted>();

    let event_id = ctx.record_event(cmd);
    ctx.record_effect(
        event_id,
        item,
        StateChange::FieldChanged {
            field: "kind".into(),
            old_value: serde_json::json!(format!("{current:?}")),
            new_value: serde_json::json!(format!("{:?}", corrupted.original)),
        },
    );
    ctx.record_effect(
        event_id,
        item,
        StateChange::MarkerRemoved {
            name: "Corrupted".into(),
        },
    );
    ctx.emit(GameReactiveEvent::ItemRestored { event_id, item });
}
