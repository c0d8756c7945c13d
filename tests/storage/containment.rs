//! Integration tests for moving things between containers

use architect_foundation::ErrorKind;
use architect_storage::{Container, Content, RoomAttribute, RoomInfo, ThingAttribute, ThingInfo, World};

fn world() -> World {
    let content = Content::new()
        .with_room("initial", RoomInfo::new("Start").holding(["key", "coin", "statue"]))
        .with_room("vault", RoomInfo::new("Vault").holding(["gem"]))
        .with_thing("key", ThingInfo::item("key", "Key"))
        .with_thing("coin", ThingInfo::item("coin", "Coin"))
        .with_thing("gem", ThingInfo::item("gem", "Gem"))
        .with_thing("statue", ThingInfo::prop("statue", "Statue"));
    World::load(&content, "initial").unwrap()
}

#[test]
fn things_live_in_exactly_one_container() {
    let mut world = world();
    let gem = world.thing_by_alias("gem").unwrap();
    let start = world.location();
    let vault = world.room_by_identifier("vault").unwrap();

    world.place_in_room(gem, start).unwrap();
    assert!(world.room(start).holds(gem));
    assert!(!world.room(vault).holds(gem));

    world.place_in_inventory(gem, None).unwrap();
    assert_eq!(world.container_of(gem), Some(Container::Inventory));
    assert!(!world.room(start).holds(gem));
}

#[test]
fn bags_respect_their_limit() {
    let mut world = world();
    let key = world.thing_by_alias("key").unwrap();
    let coin = world.thing_by_alias("coin").unwrap();
    world.set_bag_limit("pouch", Some(1));

    world.place_in_inventory(key, Some("pouch")).unwrap();
    let err = world.place_in_inventory(coin, Some("pouch")).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::BagFull { limit: 1, .. }));
    assert_eq!(world.inventory().bag_of(key), Some("pouch"));
    assert_eq!(world.container_of(coin), Some(Container::Room(world.location())));
}

#[test]
fn missing_bag_is_a_capability_error() {
    let mut world = world();
    let key = world.thing_by_alias("key").unwrap();

    let err = world.place_in_inventory(key, Some("sack")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Capability { .. }));
    assert!(world.room(world.location()).holds(key));
}

#[test]
fn moving_between_bag_and_loose() {
    let mut world = world();
    let key = world.thing_by_alias("key").unwrap();
    world.set_bag_limit("pouch", None);

    world.place_in_inventory(key, Some("pouch")).unwrap();
    world.place_in_inventory(key, None).unwrap();

    assert_eq!(world.inventory().bag_of(key), None);
    assert_eq!(world.inventory().len(), 1);
}

#[test]
fn removing_absent_thing_fails() {
    let mut world = world();
    let gem = world.thing_by_alias("gem").unwrap();
    let start = world.location();

    let err = world.remove_from_room(gem, start).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotFound { .. }));

    let err = world.remove_from_inventory(gem).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotFound { .. }));
}

#[test]
fn attributes_round_trip() {
    let mut world = world();
    let start = world.location();
    let key = world.thing_by_alias("key").unwrap();

    world
        .set_room_attribute(start, RoomAttribute::ExamineDesc, "Cobwebs.")
        .unwrap();
    world
        .set_thing_attribute(key, ThingAttribute::GroundDesc, "A key lies here.")
        .unwrap();

    assert_eq!(world.room_attribute(start, RoomAttribute::ExamineDesc), "Cobwebs.");
    assert_eq!(world.thing_attribute(key, ThingAttribute::GroundDesc), "A key lies here.");
    assert_eq!(world.room(start).on_examine(), "Cobwebs.");
}

#[test]
fn snapshots_are_unaffected_by_later_moves() {
    let mut world = world();
    let key = world.thing_by_alias("key").unwrap();
    let snapshot = world.clone();

    world.place_in_inventory(key, None).unwrap();

    assert!(snapshot.room(snapshot.location()).holds(key));
    assert!(snapshot.inventory().is_empty());
    assert_ne!(snapshot, world);
}
