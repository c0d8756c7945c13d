//! Short scenarios over a two-room world

use architect_foundation::{Direction, ErrorKind};
use architect_runtime::{GameConfig, Session};
use architect_storage::{ActionInfo, Content, RoomInfo, ThingInfo};

fn content() -> Content {
    Content::new()
        .with_room(
            "Start",
            RoomInfo::new("Start")
                .with_desc("The start.")
                .holding(["key", "statue"]),
        )
        .with_room("Hallway", RoomInfo::new("Hallway").with_desc("A hallway."))
        .with_thing("key", ThingInfo::item("key", "Key"))
        .with_thing("statue", ThingInfo::prop("statue", "Statue"))
        .with_action(
            "smash",
            ActionInfo::new(1, 1).with_template(["sys_!Crash!", "obj_{0}#SHARDS 12"]),
        )
        .with_setup("rom_Start&e Hallway")
}

fn session() -> Session {
    let config = GameConfig::default()
        .with_start_room("Start")
        .with_blueprint_commands(true);
    Session::new(&content(), config).unwrap()
}

fn say(session: &mut Session, input: &str) -> String {
    session.submit(input).unwrap();
    let log = session.output().log().to_string();
    session.gets();
    log
}

#[test]
fn start_links_to_hallway() {
    let session = session();
    let world = session.world();
    let start = world.room_by_identifier("Start").unwrap();
    let hallway = world.room_by_identifier("Hallway").unwrap();

    assert_eq!(world.room(start).link(Direction::East), Some(hallway));
    assert_eq!(world.room(hallway).link(Direction::West), Some(start));
}

#[test]
fn take_key() {
    let mut session = session();
    let key = session.world().thing_by_alias("key").unwrap();

    assert_eq!(say(&mut session, "take key"), "Picked up the Key.\n");
    assert!(session.world().inventory().contains(key));
    assert!(!session.world().room(session.world().location()).holds(key));
}

#[test]
fn take_statue() {
    let mut session = session();
    let statue = session.world().thing_by_alias("statue").unwrap();

    assert_eq!(
        say(&mut session, "take statue"),
        "It doesn't seem like you could carry that.\n"
    );
    assert!(session.world().room(session.world().location()).holds(statue));
}

#[test]
fn no_link_north() {
    let mut session = session();
    let start = session.world().location();

    assert_eq!(say(&mut session, "n"), "I can't go that way.\n");
    assert_eq!(session.world().location(), start);
}

#[test]
fn raw_instructions_shape_the_world() {
    let mut session = session();
    let hallway = session.world().room_by_identifier("Hallway").unwrap();

    say(&mut session, ":rom_Hallway&n Start");
    say(&mut session, ":rom_Start#DESC The start, repainted.");
    assert_eq!(say(&mut session, "go east"), "");
    assert_eq!(session.world().location(), hallway);

    say(&mut session, "north");
    session.submit("l").unwrap();
    assert_eq!(session.gets(), "The start, repainted.\n\nThere's not much to see here.\n");
}

#[test]
fn broken_template_is_loud_and_rolled_back() {
    let mut session = session();
    say(&mut session, "take key");
    let before = session.world().clone();

    let err = session.submit("smash key").unwrap_err();

    assert!(matches!(err.kind, ErrorKind::AttributeResolution { .. }));
    assert_eq!(err.context.unwrap().instruction(), Some("obj_key#SHARDS 12"));
    assert_eq!(session.world(), &before);
    assert_eq!(session.output().log(), "");
}
