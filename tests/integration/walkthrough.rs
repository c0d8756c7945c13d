//! The demo world played end to end

use architect_foundation::Direction;
use architect_foundation::Result;
use architect_runtime::{GameConfig, LineEditor, ReadResult, Repl, Session, demo_content};

/// An editor with nothing to read.
struct NoInput;

impl LineEditor for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn session() -> Session {
    let mut session = Session::new(&demo_content(), GameConfig::default()).unwrap();
    session.start();
    session.gets();
    session
}

/// Plays one command and returns only what it printed.
fn say(session: &mut Session, input: &str) -> String {
    session.submit(input).unwrap();
    let log = session.output().log().to_string();
    session.gets();
    log
}

fn room(session: &Session, identifier: &str) -> architect_foundation::RoomId {
    session.world().room_by_identifier(identifier).unwrap()
}

#[test]
fn opening_text() {
    let mut session = Session::new(&demo_content(), GameConfig::default()).unwrap();
    session.start();

    assert_eq!(
        session.gets(),
        "You are in a small stone chamber.\n\
         A brass key glints on the floor.\n\
         A weathered statue stands in the corner.\n\
         \n\
         Welcome to the demo!\n"
    );
}

#[test]
fn lever_opens_the_vault() {
    let mut session = session();
    let vault = room(&session, "vault");
    let hallway = room(&session, "hallway");

    say(&mut session, "e");
    assert_eq!(say(&mut session, "e"), "I can't go that way.\n");

    assert_eq!(
        say(&mut session, "pull lever"),
        "Somewhere to the east, stone grinds against stone.\n"
    );
    assert_eq!(session.world().room(hallway).link(Direction::East), Some(vault));
    assert_eq!(session.world().room(vault).link(Direction::West), Some(hallway));

    session.submit("look").unwrap();
    assert!(session.gets().contains("A rusty lever, pulled all the way down.\n"));

    say(&mut session, "e");
    assert_eq!(session.world().location(), vault);
    assert!(session.world().room(vault).visited);
}

#[test]
fn knocking_depends_on_the_room() {
    let mut session = session();
    assert_eq!(say(&mut session, "knock"), "Nobody answers.\n");

    say(&mut session, "e");
    say(&mut session, "pull lever");
    say(&mut session, "e");
    assert_eq!(say(&mut session, "knock"), "The walls here are solid.\n");
}

#[test]
fn dropping_things() {
    let mut session = session();
    let key = session.world().thing_by_alias("key").unwrap();
    let chamber = session.world().location();

    say(&mut session, "take key");
    say(&mut session, "e");
    assert_eq!(say(&mut session, "drop key"), "Dropped the Brass Key.\n");

    let hallway = session.world().location();
    assert!(session.world().room(hallway).holds(key));
    assert!(!session.world().room(chamber).holds(key));
    assert!(!session.world().inventory().contains(key));

    assert_eq!(say(&mut session, "drop key"), "You aren't holding that.\n");
}

#[test]
fn satchel_holds_two_things() {
    let mut session = session();
    say(&mut session, "take key");
    assert_eq!(say(&mut session, "stow key"), "You have nothing to stow it in.\n");

    say(&mut session, "e");
    say(&mut session, "n");
    assert_eq!(say(&mut session, "take satchel"), "Picked up the Satchel.\n");
    assert_eq!(
        say(&mut session, "stow key"),
        "You stow the Brass Key in the satchel.\n"
    );
    assert_eq!(say(&mut session, "stow note"), "You stow the Note in the satchel.\n");
    assert_eq!(say(&mut session, "stow satchel"), "There's no room for that.\n");

    assert_eq!(
        say(&mut session, "i"),
        "You are carrying:\n  Satchel\n  satchel (2/2):\n    Brass Key\n    Note\n"
    );
}

#[test]
fn things_answer_for_themselves() {
    let mut session = session();
    say(&mut session, "e");
    say(&mut session, "n");

    assert_eq!(
        say(&mut session, "read note"),
        "The note reads: The lever opens the way.\n"
    );
    assert_eq!(
        say(&mut session, "read satchel"),
        "There's nothing written on the Satchel.\n"
    );
    assert_eq!(
        say(&mut session, "pull satchel"),
        "That item cannot be used that way.\n"
    );
    assert_eq!(
        say(&mut session, "examine satchel"),
        "It has room for a couple of things.\n"
    );
    assert_eq!(say(&mut session, "l"), "Most of the books have rotted away.\n");
}

#[test]
fn player_mistakes() {
    let mut session = session();
    let before = session.world().clone();

    assert_eq!(say(&mut session, "wait key"), "That doesn't make sense.\n");
    assert_eq!(say(&mut session, "read"), "You need to do something with that.\n");
    assert_eq!(say(&mut session, "read gem"), "That thing cannot be found.\n");
    assert_eq!(
        say(&mut session, "read room"),
        "You can't do that with an entire room.\n"
    );
    assert_eq!(say(&mut session, "dance"), "Invalid command.\n");
    assert_eq!(say(&mut session, ":rom__#DESC Nope."), "Invalid command.\n");
    assert_eq!(session.world(), &before);

    assert_eq!(say(&mut session, "wait"), "Time passes.\n");
}

#[test]
fn help_lists_every_verb() {
    let mut session = session();
    assert_eq!(
        say(&mut session, "?"),
        "Movement: north, south, east, west\n\
         Actions: drop, examine, knock, pull, read, stow, take, wait\n"
    );
}

#[test]
fn scripted_walkthrough() {
    let session = Session::new(&demo_content(), GameConfig::default().with_banner(false)).unwrap();
    let mut repl = Repl::with_editor(NoInput, session);

    let transcript = repl
        .run_script(
            "# fetch the ruby\n\
             take key\n\
             e\n\
             pull lever\n\
             e\n\
             take gem\n\
             i\n\
             q\n\
             w\n",
        )
        .unwrap();

    assert!(transcript.contains("> take gem\nA low vault, cold and silent.\n\nPicked up the Ruby.\n"));
    assert!(transcript.contains("You are carrying:\n  Brass Key\n  Ruby\n"));
    assert!(transcript.ends_with("> q\nA low vault, cold and silent.\n\nGame closing.\n"));
    assert!(!transcript.contains("> w"));
    assert!(repl.session().is_finished());
}
