//! Timed actions: delayed confirmations for attach/detach and the rite.
//!
//! Scheduling an action is the only suspend point in the content. Between
//! the request and the finish message, arbitrary ticks elapse and any world
//! change may occur, so finish handlers must re-validate everything before
//! emitting a command.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::{Message, Messages};
use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;

use super::clock::GameClock;
use super::components::Dead;

/// Which confirmation a timed action resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedActionKind {
    AttachCamera,
    DetachCamera,
    SacrificeRite,
}

/// A scheduled confirmation, keyed by (kind, user, item, target).
#[derive(Debug, Clone, Copy)]
struct TimedAction {
    kind: TimedActionKind,
    user: Entity,
    item: Entity,
    target: Entity,
    finish_tick: u64,
    cancelled: bool,
}

/// Delivered when a timed action's delay elapses.
///
/// `cancelled` is set when the action was explicitly cancelled or when any
/// involved entity was despawned (or the user died) before expiry; cancelled
/// finishes must never mutate state.
#[derive(Message, Clone, Copy, Debug)]
pub struct TimedActionFinished {
    pub kind: TimedActionKind,
    pub user: Entity,
    pub item: Entity,
    pub target: Entity,
    pub cancelled: bool,
}

/// Pending timed actions, expired by `expire_timed_actions` each tick.
#[derive(Resource, Debug, Default)]
pub struct TimedActionQueue {
    pending: Vec<TimedAction>,
}

impl TimedActionQueue {
    /// Schedule a confirmation. Idempotent per key: returns false and does
    /// nothing if the same (kind, user, item, target) is already pending.
    pub fn schedule(
        &mut self,
        kind: TimedActionKind,
        user: Entity,
        item: Entity,
        target: Entity,
        finish_tick: u64,
    ) -> bool {
        let duplicate = self.pending.iter().any(|a| {
            a.kind == kind && a.user == user && a.item == item && a.target == target
        });
        if duplicate {
            return false;
        }
        self.pending.push(TimedAction {
            kind,
            user,
            item,
            target,
            finish_tick,
            cancelled: false,
        });
        true
    }

    /// Mark every pending action involving `entity` as cancelled. The finish
    /// message is still delivered (with `cancelled = true`) at expiry.
    pub fn cancel_for_entity(&mut self, entity: Entity) {
        for action in &mut self.pending {
            if action.user == entity || action.item == entity || action.target == entity {
                action.cancelled = true;
            }
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Exclusive system that expires due timed actions and delivers finish
/// messages. Runs in `TickPhase::PreUpdate`, after message rotation.
///
/// An action expires cancelled if it was explicitly cancelled, if any of its
/// key entities was despawned, or if the user died during the delay.
pub fn expire_timed_actions(world: &mut World) {
    let now = world.resource::<GameClock>().tick_count;

    let mut queue = world
        .remove_resource::<TimedActionQueue>()
        .unwrap_or_default();

    let mut finished = Vec::new();
    queue.pending.retain(|action| {
        if action.finish_tick > now {
            return true;
        }
        let cancelled = action.cancelled
            || !entity_usable(world, action.user)
            || world.get_entity(action.item).is_err()
            || world.get_entity(action.target).is_err();
        finished.push(TimedActionFinished {
            kind: action.kind,
            user: action.user,
            item: action.item,
            target: action.target,
            cancelled,
        });
        false
    });

    world.insert_resource(queue);

    if !finished.is_empty()
        && let Some(mut messages) = world.get_resource_mut::<Messages<TimedActionFinished>>()
    {
        messages.write_batch(finished);
    }
}

fn entity_usable(world: &World, entity: Entity) -> bool {
    world.get_entity(entity).is_ok() && world.get::<Dead>(entity).is_none()
}
