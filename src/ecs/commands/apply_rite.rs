use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{
    Dead, GameEntity, Herald, Position, SacrificeTarget, SacrificialAltar, Strapped,
};
use crate::ecs::events::GameReactiveEvent;
use crate::journal::{EventKind, ParticipantRole, StateChange};

use super::GameCommand;
use super::applicator::ApplyCtx;

const HERALD_NAME: &str = "Herald of the Outer Dark";
const SUMMONING_ANNOUNCEMENT: &str = "The final sacrifice is made. The herald walks among us.";

/// Authoritative sacrifice step. Re-validates the altar and the victim, ends
/// the victim, advances the session counter, and — exactly once, guarded by
/// the `summoned` flag — spawns the herald when the threshold is reached.
pub(crate) fn apply_sacrifice(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &GameCommand,
    victim: Entity,
    altar: Entity,
) {
    match world.get::<SacrificialAltar>(altar) {
        Some(a) if !a.used => {}
        _ => return,
    }
    if world.get_entity(victim).is_err() || world.get::<Dead>(victim).is_some() {
        return;
    }
    let still_strapped = world
        .get::<Strapped>(victim)
        .is_some_and(|s| s.altar == altar);
    if !still_strapped {
        return;
    }

    world
        .get_mut::<SacrificialAltar>(altar)
        .expect("checked above")
        .used = true;
    world
        .entity_mut(victim)
        .remove::<(Strapped, SacrificeTarget)>()
        .insert(Dead);

    let event_id = ctx.record_event(cmd);
    ctx.record_effect(event_id, victim, StateChange::Died);
    ctx.record_effect(
        event_id,
        altar,
        StateChange::FieldChanged {
            field: "used".into(),
            old_value: serde_json::json!(false),
            new_value: serde_json::json!(true),
        },
    );
    ctx.emit(GameReactiveEvent::VictimSacrificed {
        event_id,
        victim,
        altar,
    });
    // The victim is dead for every downstream purpose (gear drop included),
    // but target replacement must not trigger: the marker is already gone.
    ctx.emit(GameReactiveEvent::CrewDied { event_id, entity: victim });

    ctx.rule.sacrifices += 1;
    if !ctx.rule.summoned && ctx.rule.sacrifices >= ctx.rule.required_sacrifices {
        summon_herald(ctx, world, altar, event_id);
    }
}

fn summon_herald(ctx: &mut ApplyCtx, world: &mut World, altar: Entity, caused_by: u64) {
    let position = world.get::<Position>(altar).copied().unwrap_or_default();
    let id = ctx.ids.0.next_id();
    let herald = world
        .spawn((
            GameEntity {
                id,
                name: HERALD_NAME.into(),
            },
            Herald,
            position,
        ))
        .id();
    ctx.entity_map.insert(id, herald);
    ctx.rule.summoned = true;

    let event_id = ctx.record_followup(
        EventKind::Summoning,
        format!("{HERALD_NAME} rises at the altar"),
        Some(caused_by),
    );
    ctx.record_participant(event_id, herald, ParticipantRole::Subject);
    ctx.record_effect(
        event_id,
        herald,
        StateChange::Spawned {
            name: HERALD_NAME.into(),
        },
    );
    ctx.announce(ctx.rule.channel, SUMMONING_ANNOUNCEMENT);
    ctx.emit(GameReactiveEvent::HeraldSummoned { event_id, herald });
}

/// Bookkeeping: mark a crewmate as a sacrifice target.
pub(crate) fn apply_assign_target(world: &mut World, entity: Entity, tier: u8) {
    if world.get_entity(entity).is_err() {
        return;
    }
    world.entity_mut(entity).insert(SacrificeTarget { tier });
}

/// Bookkeeping: clear the target marker (fallen target being replaced).
pub(crate) fn apply_clear_target(world: &mut World, entity: Entity) {
    if world.get_entity(entity).is_err() {
        return;
    }
    world.entity_mut(entity).remove::<SacrificeTarget>();
}
