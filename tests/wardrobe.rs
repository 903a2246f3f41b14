//! Irremovable clothing scenarios: sealing on wear/pickup, refused removal,
//! and forced drops on death.

use bevy_app::App;
use bevy_ecs::entity::Entity;

use station_content::EventKind;
use station_content::ecs::test_helpers::{send_message, tick, tick_secs};
use station_content::ecs::{
    ContentPlugin, CrewRole, GameCommand, GameCommandKind, GameIds, Hands, Irremovable, ItemKind,
    Position, Sealed, Wardrobe, WearSlot, build_game_app_deterministic, inventory, spawn,
};

fn setup() -> App {
    let mut app = build_game_app_deterministic(3);
    app.add_plugins(ContentPlugin);
    app
}

fn next_id(app: &mut App) -> u64 {
    app.world_mut().resource_mut::<GameIds>().0.next_id()
}

fn spawn_crew(app: &mut App, name: &str) -> Entity {
    let id = next_id(app);
    spawn::spawn_crew(
        app.world_mut(),
        id,
        name.into(),
        CrewRole::Rank,
        Position::new(2.0, 2.0),
    )
}

fn spawn_cursed_item(app: &mut App, name: &str, kind: ItemKind, rule: Irremovable) -> Entity {
    let id = next_id(app);
    let item = spawn::spawn_item(app.world_mut(), id, name.into(), kind);
    app.world_mut().entity_mut(item).insert(rule);
    item
}

fn kill(app: &mut App, entity: Entity) {
    send_message(
        app,
        GameCommand::new(
            GameCommandKind::EndCrew { entity },
            EventKind::Death,
            "died of test causes",
        ),
    );
    tick(app);
}

#[test]
fn wearing_seals_the_item() {
    let mut app = setup();
    let wearer = spawn_crew(&mut app, "Dana");
    let armor = spawn_cursed_item(&mut app, "cursed armor", ItemKind::Armor, Irremovable::default());

    assert!(inventory::equip(app.world_mut(), wearer, WearSlot::Torso, armor));
    tick(&mut app);

    assert!(app.world().get::<Sealed>(armor).is_some());
}

#[test]
fn pocket_slot_never_seals() {
    let mut app = setup();
    let wearer = spawn_crew(&mut app, "Dana");
    let charm = spawn_cursed_item(&mut app, "cursed charm", ItemKind::Tome, Irremovable::default());

    assert!(inventory::equip(app.world_mut(), wearer, WearSlot::Pocket, charm));
    tick_secs(&mut app, 2);

    assert!(app.world().get::<Sealed>(charm).is_none());
}

#[test]
fn pickup_seals_only_when_it_applies_in_hands() {
    let mut app = setup();
    let user = spawn_crew(&mut app, "Dana");
    let gloves = spawn_cursed_item(
        &mut app,
        "cursed gloves",
        ItemKind::Armor,
        Irremovable {
            drop_on_death: true,
            applies_in_hands: true,
        },
    );
    let boots = spawn_cursed_item(&mut app, "cursed boots", ItemKind::Boots, Irremovable::default());

    assert!(inventory::pickup(app.world_mut(), user, gloves));
    assert!(inventory::pickup(app.world_mut(), user, boots));
    tick(&mut app);

    assert!(app.world().get::<Sealed>(gloves).is_some());
    assert!(app.world().get::<Sealed>(boots).is_none());
}

#[test]
fn sealed_item_refuses_unequip_and_drop() {
    let mut app = setup();
    let wearer = spawn_crew(&mut app, "Dana");
    let armor = spawn_cursed_item(&mut app, "cursed armor", ItemKind::Armor, Irremovable::default());
    assert!(inventory::equip(app.world_mut(), wearer, WearSlot::Torso, armor));
    tick(&mut app);
    assert!(app.world().get::<Sealed>(armor).is_some());

    send_message(
        &mut app,
        GameCommand::bookkeeping(GameCommandKind::UnequipItem {
            wearer,
            slot: WearSlot::Torso,
        }),
    );
    tick(&mut app);
    assert_eq!(
        app.world().get::<Wardrobe>(wearer).unwrap().worn[&WearSlot::Torso],
        armor
    );

    // Drop is refused the same way for a sealed held item.
    let gloves = spawn_cursed_item(
        &mut app,
        "cursed gloves",
        ItemKind::Armor,
        Irremovable {
            drop_on_death: true,
            applies_in_hands: true,
        },
    );
    assert!(inventory::pickup(app.world_mut(), wearer, gloves));
    tick(&mut app);
    send_message(
        &mut app,
        GameCommand::bookkeeping(GameCommandKind::DropItem {
            user: wearer,
            item: gloves,
        }),
    );
    tick(&mut app);
    assert!(app.world().get::<Hands>(wearer).unwrap().holds(gloves));
}

#[test]
fn ordinary_items_unequip_normally() {
    let mut app = setup();
    let wearer = spawn_crew(&mut app, "Dana");
    let id = next_id(&mut app);
    let jumpsuit = spawn::spawn_item(app.world_mut(), id, "jumpsuit".into(), ItemKind::Jumpsuit);
    assert!(inventory::equip(app.world_mut(), wearer, WearSlot::Torso, jumpsuit));
    tick(&mut app);

    send_message(
        &mut app,
        GameCommand::bookkeeping(GameCommandKind::UnequipItem {
            wearer,
            slot: WearSlot::Torso,
        }),
    );
    tick(&mut app);

    assert!(
        !app.world()
            .get::<Wardrobe>(wearer)
            .unwrap()
            .worn
            .contains_key(&WearSlot::Torso)
    );
    assert!(app.world().get::<Hands>(wearer).unwrap().holds(jumpsuit));
}

#[test]
fn death_drops_sealed_gear_beside_the_body() {
    let mut app = setup();
    let wearer = spawn_crew(&mut app, "Dana");
    let armor = spawn_cursed_item(&mut app, "cursed armor", ItemKind::Armor, Irremovable::default());
    assert!(inventory::equip(app.world_mut(), wearer, WearSlot::Torso, armor));
    tick(&mut app);
    assert!(app.world().get::<Sealed>(armor).is_some());

    kill(&mut app, wearer);
    // The strip reaction's command applies the tick after the death.
    tick(&mut app);

    assert!(app.world().get::<Sealed>(armor).is_none());
    assert!(
        app.world()
            .get::<Wardrobe>(wearer)
            .unwrap()
            .worn
            .is_empty()
    );
    let spot = app.world().get::<Position>(armor).unwrap();
    assert_eq!(*spot, Position::new(2.5, 2.0));

    let log = app.world().resource::<station_content::ecs::EventLog>();
    let dropped = log
        .events
        .iter()
        .find(|e| e.kind == EventKind::Dropped)
        .unwrap();
    // Causal chain: the drop traces back to the death event.
    let death = log
        .events
        .iter()
        .find(|e| e.kind == EventKind::Death)
        .unwrap();
    assert_eq!(dropped.caused_by, Some(death.id));
}

#[test]
fn gear_without_drop_on_death_stays_on_the_corpse() {
    let mut app = setup();
    let wearer = spawn_crew(&mut app, "Dana");
    let brand = spawn_cursed_item(
        &mut app,
        "cursed brand",
        ItemKind::Armor,
        Irremovable {
            drop_on_death: false,
            applies_in_hands: false,
        },
    );
    assert!(inventory::equip(app.world_mut(), wearer, WearSlot::Head, brand));
    tick(&mut app);

    kill(&mut app, wearer);
    tick(&mut app);

    assert!(app.world().get::<Sealed>(brand).is_some());
    assert_eq!(
        app.world().get::<Wardrobe>(wearer).unwrap().worn[&WearSlot::Head],
        brand
    );
}
