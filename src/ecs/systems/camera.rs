//! Spy camera attach/detach.
//!
//! Three chained Update systems:
//! 1. `handle_camera_interactions` — validate attach requests, start the
//!    timed confirmation
//! 2. `handle_unmount_verbs` — validate detach requests, start the timed
//!    confirmation
//! 3. `finish_camera_actions` — on confirmation, re-validate (the world may
//!    have changed during the delay) and emit the mount/unmount command
//!
//! The applicator performs the final authoritative check before mutating, so
//! two confirmations racing for one target resolve to exactly one mount.

use bevy_app::{App, Plugin};
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::Has;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::clock::GameClock;
use crate::ecs::commands::{GameCommand, GameCommandKind};
use crate::ecs::components::{GameEntity, Mountable, MountedCamera, SpyCamera};
use crate::ecs::messages::{InteractUsing, UnmountVerb};
use crate::ecs::schedule::{FeatureSet, GameTick};
use crate::ecs::timed::{TimedActionFinished, TimedActionKind, TimedActionQueue};
use crate::journal::{EventKind, ParticipantRole};

use super::name_of;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            (
                handle_camera_interactions,
                handle_unmount_verbs,
                finish_camera_actions,
            )
                .chain()
                .in_set(FeatureSet::Camera),
        );
    }
}

/// Validate an attach request and start the confirmation delay.
/// Every failed precondition is a silent no-op.
fn handle_camera_interactions(
    mut interactions: MessageReader<InteractUsing>,
    cameras: Query<&SpyCamera>,
    targets: Query<(Has<Mountable>, Has<MountedCamera>)>,
    clock: Res<GameClock>,
    mut queue: ResMut<TimedActionQueue>,
) {
    for msg in interactions.read() {
        if !msg.can_reach {
            continue;
        }
        let Ok(spy) = cameras.get(msg.item) else {
            continue;
        };
        if spy.attached {
            continue;
        }
        let Ok((mountable, occupied)) = targets.get(msg.target) else {
            continue;
        };
        if !mountable || occupied {
            continue;
        }
        // Idempotent per key: a duplicate request while one is pending is ignored.
        queue.schedule(
            TimedActionKind::AttachCamera,
            msg.user,
            msg.item,
            msg.target,
            clock.tick_count + u64::from(spy.attach_secs),
        );
    }
}

/// Validate a detach request and start the confirmation delay.
fn handle_unmount_verbs(
    mut verbs: MessageReader<UnmountVerb>,
    cameras: Query<&SpyCamera>,
    markers: Query<&MountedCamera>,
    clock: Res<GameClock>,
    mut queue: ResMut<TimedActionQueue>,
) {
    for msg in verbs.read() {
        let Ok(spy) = cameras.get(msg.camera) else {
            continue;
        };
        if !spy.attached {
            continue;
        }
        let marker_matches = markers.get(msg.target).is_ok_and(|m| m.camera == msg.camera);
        if !marker_matches {
            continue;
        }
        queue.schedule(
            TimedActionKind::DetachCamera,
            msg.user,
            msg.camera,
            msg.target,
            clock.tick_count + u64::from(spy.detach_secs),
        );
    }
}

/// Resume after the confirmation delay. The world may have changed —
/// cancelled or raced finishes abort silently, anything still plausible
/// becomes a command for the applicator to settle.
fn finish_camera_actions(
    mut finished: MessageReader<TimedActionFinished>,
    cameras: Query<&SpyCamera>,
    markers: Query<&MountedCamera>,
    names: Query<&GameEntity>,
    mut commands: MessageWriter<GameCommand>,
) {
    for msg in finished.read() {
        match msg.kind {
            TimedActionKind::AttachCamera => {
                if msg.cancelled {
                    continue;
                }
                // Race lost: another camera mounted first during the delay.
                if markers.get(msg.target).is_ok() {
                    continue;
                }
                let still_loose = cameras.get(msg.item).is_ok_and(|spy| !spy.attached);
                if !still_loose {
                    continue;
                }
                commands.write(
                    GameCommand::new(
                        GameCommandKind::MountCamera {
                            camera: msg.item,
                            target: msg.target,
                            user: msg.user,
                        },
                        EventKind::Mounted,
                        format!(
                            "{} mounted a camera on {}",
                            name_of(&names, msg.user),
                            name_of(&names, msg.target)
                        ),
                    )
                    .with_participant(msg.user, ParticipantRole::Actor)
                    .with_participant(msg.item, ParticipantRole::Item)
                    .with_participant(msg.target, ParticipantRole::Target),
                );
            }
            TimedActionKind::DetachCamera => {
                if msg.cancelled {
                    continue;
                }
                let marker_matches =
                    markers.get(msg.target).is_ok_and(|m| m.camera == msg.item);
                if !marker_matches {
                    continue;
                }
                commands.write(
                    GameCommand::new(
                        GameCommandKind::UnmountCamera {
                            camera: msg.item,
                            target: msg.target,
                            user: msg.user,
                        },
                        EventKind::Unmounted,
                        format!(
                            "{} took a camera off {}",
                            name_of(&names, msg.user),
                            name_of(&names, msg.target)
                        ),
                    )
                    .with_participant(msg.user, ParticipantRole::Actor)
                    .with_participant(msg.item, ParticipantRole::Item)
                    .with_participant(msg.target, ParticipantRole::Target),
                );
            }
            TimedActionKind::SacrificeRite => {}
        }
    }
}
