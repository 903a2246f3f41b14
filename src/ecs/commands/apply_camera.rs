use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{ItemKind, MountedCamera, SlotFilter, SpyCamera};
use crate::ecs::events::GameReactiveEvent;
use crate::ecs::{inventory, slots};
use crate::journal::StateChange;

use super::GameCommand;
use super::applicator::ApplyCtx;

/// Authoritative mount step. Re-validates against the live world — a racing
/// mount that was applied earlier this tick leaves a marker behind, and this
/// one must then abort without touching anything.
pub(crate) fn apply_mount(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &GameCommand,
    camera: Entity,
    target: Entity,
    user: Entity,
) {
    let Some(spy) = world.get::<SpyCamera>(camera) else {
        return;
    };
    if spy.attached {
        return;
    }
    let slot_id = spy.slot_id;
    if world.get_entity(target).is_err() || world.get::<MountedCamera>(target).is_some() {
        return;
    }

    slots::add_slot(world, target, slot_id, SlotFilter::OfKind(ItemKind::Camera));
    if !slots::insert_from_hands(world, target, slot_id, user, camera) {
        // User let go of the camera during the delay; roll the slot back.
        slots::remove_slot(world, target, slot_id);
        return;
    }
    slots::set_locked(world, target, slot_id, true);

    world.entity_mut(target).insert(MountedCamera {
        camera,
        installed_by: user,
        slot_id,
    });
    world
        .get_mut::<SpyCamera>(camera)
        .expect("checked above")
        .attached = true;

    let event_id = ctx.record_event(cmd);
    ctx.record_effect(
        event_id,
        target,
        StateChange::MarkerAdded {
            name: "MountedCamera".into(),
        },
    );
    ctx.record_effect(
        event_id,
        camera,
        StateChange::FieldChanged {
            field: "attached".into(),
            old_value: serde_json::json!(false),
            new_value: serde_json::json!(true),
        },
    );
    ctx.notify("The camera clicks into place.", camera, user);
    ctx.emit(GameReactiveEvent::CameraMounted {
        event_id,
        camera,
        target,
    });
}

/// Authoritative unmount step. Aborts silently if the marker is gone or no
/// longer references this camera.
pub(crate) fn apply_unmount(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &GameCommand,
    camera: Entity,
    target: Entity,
    user: Entity,
) {
    let Some(marker) = world.get::<MountedCamera>(target) else {
        return;
    };
    if marker.camera != camera {
        return;
    }
    let slot_id = marker.slot_id;

    slots::set_locked(world, target, slot_id, false);
    if !slots::eject_to_hands(world, target, slot_id, user) {
        // User gone or handless; put the camera on the ground instead.
        if let Some(occupant) = slots::take_occupant(world, target, slot_id) {
            inventory::place_beside(world, target, occupant);
        } else {
            tracing::warn!(?target, ?camera, "unmount found an empty camera slot");
        }
    }
    slots::remove_slot(world, target, slot_id);
    world.entity_mut(target).remove::<MountedCamera>();
    // The camera itself may have been destroyed while mounted.
    if let Some(mut spy) = world.get_mut::<SpyCamera>(camera) {
        spy.attached = false;
    }

    let event_id = ctx.record_event(cmd);
    ctx.record_effect(
        event_id,
        target,
        StateChange::MarkerRemoved {
            name: "MountedCamera".into(),
        },
    );
    ctx.record_effect(
        event_id,
        camera,
        StateChange::FieldChanged {
            field: "attached".into(),
            old_value: serde_json::json!(true),
            new_value: serde_json::json!(false),
        },
    );
    ctx.notify("The camera comes free.", camera, user);
    ctx.emit(GameReactiveEvent::CameraUnmounted {
        event_id,
        camera,
        target,
    });
}
