//! The summoning rite: tiered sacrifice targets, the altar ceremony, and the
//! threshold-counted herald summoning.
//!
//! Session state lives in the `SummoningRule` resource (inserted by the app
//! builder, dropped with the app). Target selection runs once, guarded by
//! `targets_picked`; the completion effect is guarded by `summoned`, never
//! by the counter value alone.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::{With, Without};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::seq::IndexedRandom;

use crate::ecs::clock::GameClock;
use crate::ecs::commands::{GameCommand, GameCommandKind};
use crate::ecs::components::{
    Ascended, Crew, CrewRole, Cultist, Dead, GameEntity, SacrificeTarget, SacrificialAltar,
    Strapped,
};
use crate::ecs::events::GameReactiveEvent;
use crate::ecs::messages::BeginSacrifice;
use crate::ecs::resources::{GameRng, SummoningRule};
use crate::ecs::schedule::{FeatureSet, GameTick, TickPhase};
use crate::ecs::timed::{TimedActionFinished, TimedActionKind, TimedActionQueue};
use crate::journal::{EventKind, ParticipantRole};

use super::name_of;

pub struct RitePlugin;

impl Plugin for RitePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            (
                pick_sacrifice_targets.run_if(targets_not_picked),
                handle_rite_interactions,
                finish_rite_actions,
            )
                .chain()
                .in_set(FeatureSet::Rite),
        );
        app.add_systems(
            GameTick,
            replace_fallen_targets.in_set(TickPhase::Reactions),
        );
    }
}

fn targets_not_picked(rule: Res<SummoningRule>) -> bool {
    !rule.targets_picked
}

/// Whether a role qualifies for a given sacrifice tier.
/// Tier 1 demands a captain, tier 2 any command crew, tier 3 anyone.
fn tier_eligible(tier: u8, role: CrewRole) -> bool {
    match tier {
        1 => role == CrewRole::Captain,
        2 => matches!(role, CrewRole::Captain | CrewRole::Command),
        _ => true,
    }
}

/// One-shot target selection at rule activation: one target per tier, random
/// among eligible living crew, deterministic under the seeded RNG. Waits
/// until at least one crewmate exists; a tier with no eligible crew stays
/// vacant.
fn pick_sacrifice_targets(
    crew: Query<(Entity, &CrewRole), (With<Crew>, Without<Dead>)>,
    mut rule: ResMut<SummoningRule>,
    mut rng: ResMut<GameRng>,
    mut commands: MessageWriter<GameCommand>,
) {
    if crew.is_empty() {
        return;
    }

    let mut chosen: Vec<Entity> = Vec::new();
    for tier in 1..=3u8 {
        let pool: Vec<Entity> = crew
            .iter()
            .filter(|(entity, role)| tier_eligible(tier, **role) && !chosen.contains(entity))
            .map(|(entity, _)| entity)
            .collect();
        if let Some(&entity) = pool.choose(&mut rng.rng) {
            chosen.push(entity);
            commands.write(GameCommand::bookkeeping(
                GameCommandKind::AssignSacrificeTarget { entity, tier },
            ));
        }
    }
    rule.targets_picked = true;
}

/// Validate a rite request and start the ceremony delay. Requires a living
/// cultist, an unused altar, a living marked victim strapped to that altar,
/// and a quorum of living ascended cultists.
#[allow(clippy::type_complexity)]
fn handle_rite_interactions(
    mut rites: MessageReader<BeginSacrifice>,
    cultists: Query<(), (With<Cultist>, Without<Dead>)>,
    altars: Query<&SacrificialAltar>,
    victims: Query<(Entity, &Strapped), (With<SacrificeTarget>, Without<Dead>)>,
    ascended: Query<(), (With<Ascended>, Without<Dead>)>,
    rule: Res<SummoningRule>,
    clock: Res<GameClock>,
    mut queue: ResMut<TimedActionQueue>,
) {
    for msg in rites.read() {
        if cultists.get(msg.user).is_err() {
            continue;
        }
        let Ok(altar) = altars.get(msg.altar) else {
            continue;
        };
        if altar.used {
            continue;
        }
        let Some(victim) = victims
            .iter()
            .find(|(_, strapped)| strapped.altar == msg.altar)
            .map(|(entity, _)| entity)
        else {
            continue;
        };
        if (ascended.iter().count() as u32) < rule.required_ascended {
            continue;
        }
        queue.schedule(
            TimedActionKind::SacrificeRite,
            msg.user,
            msg.altar,
            victim,
            clock.tick_count + u64::from(altar.rite_secs),
        );
    }
}

/// Resume after the ceremony delay: abort silently if cancelled, the altar
/// was used meanwhile, or the victim is gone or unstrapped.
#[allow(clippy::type_complexity)]
fn finish_rite_actions(
    mut finished: MessageReader<TimedActionFinished>,
    altars: Query<&SacrificialAltar>,
    victims: Query<&Strapped, Without<Dead>>,
    names: Query<&GameEntity>,
    mut commands: MessageWriter<GameCommand>,
) {
    for msg in finished.read() {
        if msg.kind != TimedActionKind::SacrificeRite || msg.cancelled {
            continue;
        }
        let altar_ready = altars.get(msg.item).is_ok_and(|a| !a.used);
        if !altar_ready {
            continue;
        }
        let still_strapped = victims.get(msg.target).is_ok_and(|s| s.altar == msg.item);
        if !still_strapped {
            continue;
        }
        commands.write(
            GameCommand::new(
                GameCommandKind::SacrificeVictim {
                    victim: msg.target,
                    altar: msg.item,
                    user: msg.user,
                },
                EventKind::Sacrifice,
                format!(
                    "{} sacrificed {} at the altar",
                    name_of(&names, msg.user),
                    name_of(&names, msg.target)
                ),
            )
            .with_participant(msg.user, ParticipantRole::Actor)
            .with_participant(msg.target, ParticipantRole::Victim)
            .with_participant(msg.item, ParticipantRole::Target),
        );
    }
}

/// Reaction: a marked target who dies away from the altar is replaced by
/// another crewmate of the same tier. Altar deaths never reach here with the
/// marker still present — the sacrifice step removes it in the same
/// applicator transaction that kills the victim.
#[allow(clippy::type_complexity)]
fn replace_fallen_targets(
    mut events: MessageReader<GameReactiveEvent>,
    targets: Query<&SacrificeTarget>,
    crew: Query<(Entity, &CrewRole), (With<Crew>, Without<Dead>, Without<SacrificeTarget>)>,
    mut rng: ResMut<GameRng>,
    mut commands: MessageWriter<GameCommand>,
) {
    for event in events.read() {
        let GameReactiveEvent::CrewDied { entity, .. } = event else {
            continue;
        };
        let Ok(target) = targets.get(*entity) else {
            continue;
        };
        let tier = target.tier;

        commands.write(GameCommand::bookkeeping(
            GameCommandKind::ClearSacrificeTarget { entity: *entity },
        ));

        let pool: Vec<Entity> = crew
            .iter()
            .filter(|(candidate, role)| candidate != entity && tier_eligible(tier, **role))
            .map(|(candidate, _)| candidate)
            .collect();
        // No eligible replacement: the slot stays vacant.
        if let Some(&replacement) = pool.choose(&mut rng.rng) {
            commands.write(GameCommand::bookkeeping(
                GameCommandKind::AssignSacrificeTarget {
                    entity: replacement,
                    tier,
                },
            ));
        }
    }
}
