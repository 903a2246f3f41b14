use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::GameClock;
use crate::ecs::components::ChannelId;
use crate::ecs::events::GameReactiveEvent;
use crate::ecs::messages::TelepathyBroadcast;
use crate::ecs::resources::{EventLog, GameEntityMap, GameIds, Popups, SummoningRule};
use crate::journal::{EventKind, EventParticipant, GameEvent, ParticipantRole, StateChange};
use crate::journal::EventEffect;

use super::{GameCommand, GameCommandKind};
use super::apply_camera;
use super::apply_items;
use super::apply_lifecycle;
use super::apply_rite;
use super::apply_wardrobe;

/// Context passed to all `apply_*` sub-functions, providing mutable access
/// to the resources they need without requiring direct World access.
///
/// Journal entries are recorded only after a command passes re-validation:
/// apply functions call `record_event` themselves once they commit to the
/// mutation, so silently-aborted commands leave no trace.
pub(crate) struct ApplyCtx {
    pub event_log: EventLog,
    pub ids: GameIds,
    pub entity_map: GameEntityMap,
    pub rule: SummoningRule,
    pub popups: Popups,
    pub clock_tick: u64,
    pub reactive_events: Vec<GameReactiveEvent>,
    pub broadcasts: Vec<TelepathyBroadcast>,
}

impl ApplyCtx {
    /// Record an event entry in the log for a non-bookkeeping command.
    /// Returns the event_id (0 for bookkeeping commands that skip recording).
    pub(crate) fn record_event(&mut self, cmd: &GameCommand) -> u64 {
        if cmd.is_bookkeeping() {
            return 0;
        }

        let event_id = self.ids.0.next_id();

        self.event_log.events.push(GameEvent {
            id: event_id,
            kind: cmd.event_kind.clone(),
            tick: self.clock_tick,
            description: cmd.description.clone(),
            caused_by: cmd.caused_by,
            data: cmd.event_data.clone(),
        });

        for (entity, role) in &cmd.participants {
            self.record_participant(event_id, *entity, role.clone());
        }

        event_id
    }

    /// Record a follow-on event not carried by any command (the summoning
    /// fired by a threshold crossing). Returns its event_id.
    pub(crate) fn record_followup(
        &mut self,
        kind: EventKind,
        description: impl Into<String>,
        caused_by: Option<u64>,
    ) -> u64 {
        let event_id = self.ids.0.next_id();
        self.event_log.events.push(GameEvent {
            id: event_id,
            kind,
            tick: self.clock_tick,
            description: description.into(),
            caused_by,
            data: serde_json::Value::Null,
        });
        event_id
    }

    pub(crate) fn record_participant(
        &mut self,
        event_id: u64,
        entity: Entity,
        role: ParticipantRole,
    ) {
        if let Some(entity_id) = self.entity_map.get_id(entity) {
            self.event_log.participants.push(EventParticipant {
                event_id,
                entity_id,
                role,
            });
        }
    }

    /// Record a state-change effect against an entity.
    pub(crate) fn record_effect(&mut self, event_id: u64, entity: Entity, change: StateChange) {
        let entity_id = self.entity_map.get_id(entity).unwrap_or(0);
        self.event_log.effects.push(EventEffect {
            event_id,
            entity_id,
            effect: change,
        });
    }

    /// Queue a reactive event for emission after all commands are processed.
    pub(crate) fn emit(&mut self, event: GameReactiveEvent) {
        self.reactive_events.push(event);
    }

    /// Deliver a popup notification to a user.
    pub(crate) fn notify(&mut self, text: impl Into<String>, source: Entity, recipient: Entity) {
        self.popups.notify(text, source, recipient);
    }

    /// Queue a channel-wide telepathic announcement.
    pub(crate) fn announce(&mut self, channel: ChannelId, text: impl Into<String>) {
        self.broadcasts.push(TelepathyBroadcast {
            channel,
            text: text.into(),
        });
    }
}

/// Exclusive system that drains all pending `GameCommand` messages, applies
/// state changes, records the audit trail, and emits `GameReactiveEvent`
/// messages.
///
/// Runs in `TickPhase::PostUpdate`. This is the transaction point: every
/// command is re-validated against the live world here, so of two commands
/// racing for the same target exactly one mutates and the other aborts.
pub fn apply_game_commands(world: &mut World) {
    // Drain all pending commands
    let commands: Vec<GameCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<GameCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    // Extract resources into ApplyCtx
    let clock_tick = world.resource::<GameClock>().tick_count;
    let event_log = world.remove_resource::<EventLog>().unwrap();
    let ids = world.remove_resource::<GameIds>().unwrap();
    let entity_map = world.remove_resource::<GameEntityMap>().unwrap();
    let rule = world.remove_resource::<SummoningRule>().unwrap();
    let popups = world.remove_resource::<Popups>().unwrap();

    let mut ctx = ApplyCtx {
        event_log,
        ids,
        entity_map,
        rule,
        popups,
        clock_tick,
        reactive_events: Vec::new(),
        broadcasts: Vec::new(),
    };

    for cmd in &commands {
        match cmd.kind {
            // Camera
            GameCommandKind::MountCamera {
                camera,
                target,
                user,
            } => {
                apply_camera::apply_mount(&mut ctx, world, cmd, camera, target, user);
            }
            GameCommandKind::UnmountCamera {
                camera,
                target,
                user,
            } => {
                apply_camera::apply_unmount(&mut ctx, world, cmd, camera, target, user);
            }

            // Lifecycle
            GameCommandKind::EndCrew { entity } => {
                apply_lifecycle::apply_end_crew(&mut ctx, world, cmd, entity);
            }

            // Rite
            GameCommandKind::SacrificeVictim { victim, altar, .. } => {
                apply_rite::apply_sacrifice(&mut ctx, world, cmd, victim, altar);
            }
            GameCommandKind::AssignSacrificeTarget { entity, tier } => {
                apply_rite::apply_assign_target(world, entity, tier);
            }
            GameCommandKind::ClearSacrificeTarget { entity } => {
                apply_rite::apply_clear_target(world, entity);
            }

            // Wardrobe
            GameCommandKind::SealItem { item } => {
                apply_wardrobe::apply_seal(world, item);
            }
            GameCommandKind::UnequipItem { wearer, slot } => {
                apply_wardrobe::apply_unequip(world, wearer, slot);
            }
            GameCommandKind::DropItem { user, item } => {
                apply_wardrobe::apply_drop(world, user, item);
            }
            GameCommandKind::StripIrremovable { owner } => {
                apply_wardrobe::apply_strip(&mut ctx, world, cmd, owner);
            }

            // Corruption
            GameCommandKind::CorruptItem { item } => {
                apply_items::apply_corrupt(&mut ctx, world, cmd, item);
            }
            GameCommandKind::RestoreItem { item } => {
                apply_items::apply_restore(&mut ctx, world, cmd, item);
            }
        }
    }

    // Write reactive events and queued announcements
    let reactive_events = std::mem::take(&mut ctx.reactive_events);
    if let Some(mut messages) = world.get_resource_mut::<Messages<GameReactiveEvent>>() {
        messages.write_batch(reactive_events);
    }
    let broadcasts = std::mem::take(&mut ctx.broadcasts);
    if let Some(mut messages) = world.get_resource_mut::<Messages<TelepathyBroadcast>>() {
        messages.write_batch(broadcasts);
    }

    // Put resources back
    world.insert_resource(ctx.event_log);
    world.insert_resource(ctx.ids);
    world.insert_resource(ctx.entity_map);
    world.insert_resource(ctx.rule);
    world.insert_resource(ctx.popups);
}
