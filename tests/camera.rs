//! End-to-end spy camera scenarios: mount, detach, duplicate requests,
//! racing confirmations, and mid-delay cancellation.

use bevy_app::App;

use station_content::EventKind;
use station_content::ecs::test_helpers::{send_message, tick, tick_secs};
use station_content::ecs::{
    ContentPlugin, CrewRole, EventLog, GameIds, InteractUsing, MountedCamera, Popups, Position,
    SpyCamera, UnmountVerb, build_game_app_deterministic, inventory, spawn,
};
use bevy_ecs::entity::Entity;

fn setup() -> App {
    let mut app = build_game_app_deterministic(7);
    app.add_plugins(ContentPlugin);
    app
}

fn next_id(app: &mut App) -> u64 {
    app.world_mut().resource_mut::<GameIds>().0.next_id()
}

fn spawn_crew(app: &mut App, name: &str, role: CrewRole) -> Entity {
    let id = next_id(app);
    spawn::spawn_crew(app.world_mut(), id, name.into(), role, Position::new(0.0, 0.0))
}

fn spawn_camera(app: &mut App, name: &str) -> Entity {
    let id = next_id(app);
    spawn::spawn_camera(app.world_mut(), id, name.into())
}

fn spawn_fixture(app: &mut App, name: &str) -> Entity {
    let id = next_id(app);
    spawn::spawn_fixture(app.world_mut(), id, name.into(), Position::new(5.0, 5.0))
}

fn give(app: &mut App, user: Entity, item: Entity) {
    assert!(inventory::pickup(app.world_mut(), user, item));
}

fn mounted_events(app: &App) -> usize {
    app.world()
        .resource::<EventLog>()
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Mounted)
        .count()
}

#[test]
fn attach_happy_path() {
    let mut app = setup();
    let user = spawn_crew(&mut app, "Dana", CrewRole::Rank);
    let camera = spawn_camera(&mut app, "spy camera");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, user, camera);

    send_message(
        &mut app,
        InteractUsing {
            user,
            item: camera,
            target: locker,
            can_reach: true,
        },
    );

    // Confirmation delay is 3 seconds; the finish lands on the 4th tick.
    tick_secs(&mut app, 3);
    assert!(app.world().get::<MountedCamera>(locker).is_none());

    tick(&mut app);
    let marker = app.world().get::<MountedCamera>(locker).unwrap();
    assert_eq!(marker.camera, camera);
    assert_eq!(marker.installed_by, user);
    assert!(app.world().get::<SpyCamera>(camera).unwrap().attached);

    // Flag and marker agree, one journal entry, one popup to the user.
    assert_eq!(mounted_events(&app), 1);
    let popups = app.world().resource::<Popups>();
    let delivered = popups.for_recipient(user);
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].text, "The camera clicks into place.");
}

#[test]
fn camera_plugin_alone_is_sufficient() {
    // A host may install a single feature plugin; the applicator must run
    // with just the builder-provided resources.
    let mut app = build_game_app_deterministic(7);
    app.add_plugins(station_content::ecs::systems::CameraPlugin);

    let user = spawn_crew(&mut app, "Dana", CrewRole::Rank);
    let camera = spawn_camera(&mut app, "spy camera");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, user, camera);

    send_message(
        &mut app,
        InteractUsing {
            user,
            item: camera,
            target: locker,
            can_reach: true,
        },
    );
    tick_secs(&mut app, 4);

    assert!(app.world().get::<MountedCamera>(locker).is_some());
    assert_eq!(mounted_events(&app), 1);
}

#[test]
fn out_of_reach_is_silent() {
    let mut app = setup();
    let user = spawn_crew(&mut app, "Dana", CrewRole::Rank);
    let camera = spawn_camera(&mut app, "spy camera");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, user, camera);

    send_message(
        &mut app,
        InteractUsing {
            user,
            item: camera,
            target: locker,
            can_reach: false,
        },
    );
    tick_secs(&mut app, 5);

    assert!(app.world().get::<MountedCamera>(locker).is_none());
    assert_eq!(mounted_events(&app), 0);
    assert!(app.world().resource::<Popups>().entries.is_empty());
}

#[test]
fn duplicate_requests_mount_once() {
    let mut app = setup();
    let user = spawn_crew(&mut app, "Dana", CrewRole::Rank);
    let camera = spawn_camera(&mut app, "spy camera");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, user, camera);

    // Two identical requests in one tick, a third mid-delay.
    for _ in 0..2 {
        send_message(
            &mut app,
            InteractUsing {
                user,
                item: camera,
                target: locker,
                can_reach: true,
            },
        );
    }
    tick(&mut app);
    send_message(
        &mut app,
        InteractUsing {
            user,
            item: camera,
            target: locker,
            can_reach: true,
        },
    );
    tick_secs(&mut app, 5);

    assert!(app.world().get::<MountedCamera>(locker).is_some());
    assert_eq!(mounted_events(&app), 1);
}

#[test]
fn racing_attaches_resolve_to_one_winner() {
    let mut app = setup();
    let alice = spawn_crew(&mut app, "Alice", CrewRole::Rank);
    let bob = spawn_crew(&mut app, "Bob", CrewRole::Rank);
    let cam_a = spawn_camera(&mut app, "camera A");
    let cam_b = spawn_camera(&mut app, "camera B");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, alice, cam_a);
    give(&mut app, bob, cam_b);

    // Both confirmations expire on the same tick; the applicator settles the
    // race in command order.
    send_message(
        &mut app,
        InteractUsing {
            user: alice,
            item: cam_a,
            target: locker,
            can_reach: true,
        },
    );
    send_message(
        &mut app,
        InteractUsing {
            user: bob,
            item: cam_b,
            target: locker,
            can_reach: true,
        },
    );
    tick_secs(&mut app, 4);

    let marker = app.world().get::<MountedCamera>(locker).unwrap();
    assert_eq!(marker.camera, cam_a);
    assert_eq!(marker.installed_by, alice);
    assert!(app.world().get::<SpyCamera>(cam_a).unwrap().attached);

    // The loser keeps its camera, unattached and still in hand.
    assert!(!app.world().get::<SpyCamera>(cam_b).unwrap().attached);
    assert!(
        app.world()
            .get::<station_content::ecs::Hands>(bob)
            .unwrap()
            .holds(cam_b)
    );
    assert_eq!(mounted_events(&app), 1);
}

#[test]
fn racing_attaches_reversed_order_flips_the_winner() {
    let mut app = setup();
    let alice = spawn_crew(&mut app, "Alice", CrewRole::Rank);
    let bob = spawn_crew(&mut app, "Bob", CrewRole::Rank);
    let cam_a = spawn_camera(&mut app, "camera A");
    let cam_b = spawn_camera(&mut app, "camera B");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, alice, cam_a);
    give(&mut app, bob, cam_b);

    send_message(
        &mut app,
        InteractUsing {
            user: bob,
            item: cam_b,
            target: locker,
            can_reach: true,
        },
    );
    send_message(
        &mut app,
        InteractUsing {
            user: alice,
            item: cam_a,
            target: locker,
            can_reach: true,
        },
    );
    tick_secs(&mut app, 4);

    let marker = app.world().get::<MountedCamera>(locker).unwrap();
    assert_eq!(marker.camera, cam_b);
    assert!(!app.world().get::<SpyCamera>(cam_a).unwrap().attached);
    assert_eq!(mounted_events(&app), 1);
}

#[test]
fn target_despawn_cancels_pending_attach() {
    let mut app = setup();
    let user = spawn_crew(&mut app, "Dana", CrewRole::Rank);
    let camera = spawn_camera(&mut app, "spy camera");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, user, camera);

    send_message(
        &mut app,
        InteractUsing {
            user,
            item: camera,
            target: locker,
            can_reach: true,
        },
    );
    tick(&mut app);
    app.world_mut().despawn(locker);
    tick_secs(&mut app, 5);

    assert!(!app.world().get::<SpyCamera>(camera).unwrap().attached);
    assert_eq!(mounted_events(&app), 0);
}

#[test]
fn detach_round_trip() {
    let mut app = setup();
    let user = spawn_crew(&mut app, "Dana", CrewRole::Rank);
    let camera = spawn_camera(&mut app, "spy camera");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, user, camera);

    send_message(
        &mut app,
        InteractUsing {
            user,
            item: camera,
            target: locker,
            can_reach: true,
        },
    );
    tick_secs(&mut app, 4);
    assert!(app.world().get::<MountedCamera>(locker).is_some());

    send_message(
        &mut app,
        UnmountVerb {
            user,
            camera,
            target: locker,
        },
    );
    tick_secs(&mut app, 4);

    assert!(app.world().get::<MountedCamera>(locker).is_none());
    assert!(!app.world().get::<SpyCamera>(camera).unwrap().attached);
    assert!(
        app.world()
            .get::<station_content::ecs::Hands>(user)
            .unwrap()
            .holds(camera)
    );

    let log = app.world().resource::<EventLog>();
    assert_eq!(
        log.events
            .iter()
            .filter(|e| e.kind == EventKind::Unmounted)
            .count(),
        1
    );
    let popups = app.world().resource::<Popups>();
    assert_eq!(popups.for_recipient(user).len(), 2);
}

#[test]
fn detach_on_unmounted_target_is_silent() {
    let mut app = setup();
    let user = spawn_crew(&mut app, "Dana", CrewRole::Rank);
    let camera = spawn_camera(&mut app, "spy camera");
    let locker = spawn_fixture(&mut app, "locker");
    give(&mut app, user, camera);

    send_message(
        &mut app,
        UnmountVerb {
            user,
            camera,
            target: locker,
        },
    );
    tick_secs(&mut app, 5);

    assert!(app.world().resource::<EventLog>().events.is_empty());
    assert!(app.world().resource::<Popups>().entries.is_empty());
}
