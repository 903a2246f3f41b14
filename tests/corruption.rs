//! Item corruption scenarios: kind swap, reversal, and kinds with no
//! corrupted counterpart.

use bevy_app::App;
use bevy_ecs::entity::Entity;

use station_content::EventKind;
use station_content::ecs::test_helpers::{send_message, tick};
use station_content::ecs::{
    ContentPlugin, Corrupted, EventLog, GameCommand, GameCommandKind, GameIds, Item, ItemKind,
    build_game_app_deterministic, spawn,
};

fn setup() -> App {
    let mut app = build_game_app_deterministic(13);
    app.add_plugins(ContentPlugin);
    app
}

fn spawn_item(app: &mut App, name: &str, kind: ItemKind) -> Entity {
    let id = app.world_mut().resource_mut::<GameIds>().0.next_id();
    spawn::spawn_item(app.world_mut(), id, name.into(), kind)
}

fn corrupt(app: &mut App, item: Entity) {
    send_message(
        app,
        GameCommand::new(
            GameCommandKind::CorruptItem { item },
            EventKind::Corruption,
            "the medkit warps into something wrong",
        ),
    );
    tick(app);
}

fn restore(app: &mut App, item: Entity) {
    send_message(
        app,
        GameCommand::new(
            GameCommandKind::RestoreItem { item },
            EventKind::Restoration,
            "the corruption recedes",
        ),
    );
    tick(app);
}

#[test]
fn corruption_swaps_kind_and_marks() {
    let mut app = setup();
    let medkit = spawn_item(&mut app, "medkit", ItemKind::Medkit);

    corrupt(&mut app, medkit);

    assert_eq!(
        app.world().get::<Item>(medkit).unwrap().kind,
        ItemKind::CorruptedMedkit
    );
    assert_eq!(
        app.world().get::<Corrupted>(medkit).unwrap().original,
        ItemKind::Medkit
    );
    let log = app.world().resource::<EventLog>();
    assert_eq!(
        log.events
            .iter()
            .filter(|e| e.kind == EventKind::Corruption)
            .count(),
        1
    );
}

#[test]
fn corruption_is_not_stacked() {
    let mut app = setup();
    let tome = spawn_item(&mut app, "tome", ItemKind::Tome);

    corrupt(&mut app, tome);
    corrupt(&mut app, tome);

    assert_eq!(
        app.world().get::<Item>(tome).unwrap().kind,
        ItemKind::CorruptedTome
    );
    assert_eq!(
        app.world().get::<Corrupted>(tome).unwrap().original,
        ItemKind::Tome
    );
    let log = app.world().resource::<EventLog>();
    assert_eq!(
        log.events
            .iter()
            .filter(|e| e.kind == EventKind::Corruption)
            .count(),
        1
    );
}

#[test]
fn restore_round_trip() {
    let mut app = setup();
    let medkit = spawn_item(&mut app, "medkit", ItemKind::Medkit);

    corrupt(&mut app, medkit);
    restore(&mut app, medkit);

    assert_eq!(
        app.world().get::<Item>(medkit).unwrap().kind,
        ItemKind::Medkit
    );
    assert!(app.world().get::<Corrupted>(medkit).is_none());
}

#[test]
fn restore_on_clean_item_is_silent() {
    let mut app = setup();
    let medkit = spawn_item(&mut app, "medkit", ItemKind::Medkit);

    restore(&mut app, medkit);

    assert_eq!(
        app.world().get::<Item>(medkit).unwrap().kind,
        ItemKind::Medkit
    );
    assert!(app.world().resource::<EventLog>().events.is_empty());
}

#[test]
fn kinds_without_counterpart_ignore_corruption() {
    let mut app = setup();
    let boots = spawn_item(&mut app, "boots", ItemKind::Boots);

    corrupt(&mut app, boots);

    assert_eq!(app.world().get::<Item>(boots).unwrap().kind, ItemKind::Boots);
    assert!(app.world().get::<Corrupted>(boots).is_none());
    assert!(app.world().resource::<EventLog>().events.is_empty());
}
