//! Integration tests for the interpreter against a small world

use architect_foundation::{Direction, ErrorKind, Result};
use architect_language::{Interpreter, InterpreterConfig, Output};
use architect_storage::{Content, RoomAttribute, RoomInfo, ThingAttribute, ThingInfo, World};

fn world() -> World {
    let content = Content::new()
        .with_room(
            "Start",
            RoomInfo::new("Start").holding(["key", "statue"]),
        )
        .with_room("Hallway", RoomInfo::new("Hallway").holding(["lamp"]))
        .with_thing("key", ThingInfo::item("key", "Key"))
        .with_thing("lamp", ThingInfo::item("lamp", "Lamp"))
        .with_thing("statue", ThingInfo::prop("statue", "Statue"));
    World::load(&content, "Start").unwrap()
}

fn run_with(interpreter: &Interpreter, world: &mut World, lines: &[&str]) -> Result<String> {
    let mut output = Output::new();
    interpreter.execute_all(world, &mut output, lines)?;
    Ok(output.drain())
}

fn run(world: &mut World, lines: &[&str]) -> Result<String> {
    run_with(&Interpreter::default(), world, lines)
}

#[test]
fn start_hallway_scenario() {
    let mut world = world();
    run(&mut world, &["rom_Start&e Hallway"]).unwrap();

    let start = world.room_by_identifier("Start").unwrap();
    let hallway = world.room_by_identifier("Hallway").unwrap();
    assert_eq!(world.room(start).link(Direction::East), Some(hallway));
    assert_eq!(world.room(hallway).link(Direction::West), Some(start));
}

#[test]
fn self_link_violates_symmetry() {
    let mut world = world();
    let err = run(&mut world, &["rom_Start&n Start"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkInvariant(_)));
}

#[test]
fn one_way_links_without_euclidean_policy() {
    let interpreter = Interpreter::new(InterpreterConfig::new().with_euclidean(false));
    let mut world = world();
    run_with(&interpreter, &mut world, &["rom_Start&s Hallway", "rom_Hallway&n Hallway"])
        .unwrap();

    let start = world.room_by_identifier("Start").unwrap();
    let hallway = world.room_by_identifier("Hallway").unwrap();
    assert_eq!(world.room(start).link(Direction::South), Some(hallway));
    assert_eq!(world.room(hallway).link(Direction::North), Some(hallway));
}

#[test]
fn conditional_moves_things_it_finds() {
    let mut world = world();
    let log = run(
        &mut world,
        &[
            "inv_key+",
            "ift_key@$>rom_Hallway+key}sys_!Left the key.<sys_!No key.",
        ],
    )
    .unwrap();

    let key = world.thing_by_alias("key").unwrap();
    let hallway = world.room_by_identifier("Hallway").unwrap();
    assert_eq!(log, "Left the key.\n");
    assert!(world.room(hallway).holds(key));
    assert!(world.inventory().is_empty());
}

#[test]
fn current_room_alias_follows_location() {
    let mut world = world();
    let hallway = world.room_by_identifier("Hallway").unwrap();
    world.set_location(hallway);

    let log = run(&mut world, &["ift__=Hallway>sys_!In the hallway."]).unwrap();
    assert_eq!(log, "In the hallway.\n");

    run(&mut world, &["rom__-lamp"]).unwrap();
    let lamp = world.thing_by_alias("lamp").unwrap();
    assert!(world.container_of(lamp).is_none());
}

#[test]
fn attribute_codes_round_trip() {
    let mut world = world();
    run(
        &mut world,
        &["rom_Start#DESC A bare room.", "obj_lamp#EXAM It flickers."],
    )
    .unwrap();

    let start = world.room_by_identifier("Start").unwrap();
    let lamp = world.thing_by_alias("lamp").unwrap();
    assert_eq!(world.room_attribute(start, RoomAttribute::EntryDesc), "A bare room.");
    assert_eq!(world.thing_attribute(lamp, ThingAttribute::ExamineDesc), "It flickers.");
}

#[test]
fn unknown_attribute_code() {
    let mut world = world();
    let err = run(&mut world, &["obj_lamp#WEIGHT 3"]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::AttributeResolution { ref code, .. } if code == "WEIGHT"
    ));
}

#[test]
fn action_sequence_is_atomic() {
    let mut world = world();
    let before = world.clone();
    let mut output = Output::new();

    let err = Interpreter::default()
        .execute_all(
            &mut world,
            &mut output,
            ["inv_key+", "sys_!Got it.", "inv_statue+"],
        )
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Immovable(_)));
    assert_eq!(world, before);
    assert_eq!(output.log(), "");
}

#[test]
fn nesting_is_bounded() {
    let interpreter = Interpreter::new(InterpreterConfig::new().with_max_depth(2));
    let mut world = world();

    let nested = r"ift_key=key>ift_key=key\>ift_key=key\\\>sys_!deep";
    let err = run_with(&interpreter, &mut world, &[nested]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LimitExceeded(_)));

    let shallow = r"ift_key=key>ift_key=key\>sys_!fine";
    assert_eq!(run_with(&interpreter, &mut world, &[shallow]).unwrap(), "fine\n");
}

#[test]
fn iden_code_renames_the_room() {
    let mut world = world();
    let start = world.location();

    run(&mut world, &["rom__#IDEN Atrium"]).unwrap();

    assert_eq!(world.room(start).identifier, "Atrium");
    assert_eq!(world.room_by_identifier("Atrium"), Some(start));
    assert_eq!(world.room_by_identifier("Start"), None);
}

#[test]
fn relinking_leaves_no_stale_reverse_link() {
    let content = Content::new()
        .with_room("Start", RoomInfo::new("Start"))
        .with_room("Hallway", RoomInfo::new("Hallway"))
        .with_room("Cellar", RoomInfo::new("Cellar"));
    let mut world = World::load(&content, "Start").unwrap();
    let start = world.room_by_identifier("Start").unwrap();
    let hallway = world.room_by_identifier("Hallway").unwrap();
    let cellar = world.room_by_identifier("Cellar").unwrap();

    run(&mut world, &["rom_Start&e Hallway", "rom_Start&e Cellar"]).unwrap();

    assert_eq!(world.room(start).link(Direction::East), Some(cellar));
    assert_eq!(world.room(cellar).link(Direction::West), Some(start));
    assert_eq!(world.room(hallway).link(Direction::West), None);
}
