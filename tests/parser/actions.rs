//! Integration tests for the action engine

use architect_language::{Interpreter, Output};
use architect_parser::{Action, ActionEngine, ActionOutcome, ActionRegistry, Refusal};
use architect_storage::{Content, RoomInfo, ThingInfo, World};

fn world() -> World {
    let content = Content::new()
        .with_room("initial", RoomInfo::new("Start").holding(["key", "statue", "box"]))
        .with_room("vault", RoomInfo::new("Vault").holding(["gem"]))
        .with_thing("key", ThingInfo::item("key", "Key").with_examine("A brass key."))
        .with_thing("box", ThingInfo::item("box", "Box"))
        .with_thing("gem", ThingInfo::item("gem", "Gem"))
        .with_thing("statue", ThingInfo::prop("statue", "Statue"));
    World::load(&content, "initial").unwrap()
}

fn engine() -> ActionEngine {
    let mut registry = ActionRegistry::new();
    registry.register(Action::new("examine", 1, 1).with_template(["sys_!{0.exam}"]));
    registry.register(
        Action::new("put", 2, 2).with_template(["sys_!You put the {0.name} by the {1.name}."]),
    );
    ActionEngine::new(registry, Interpreter::default())
}

fn perform(world: &mut World, output: &mut Output, verb: &str, args: &[&str]) -> ActionOutcome {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    engine().perform(world, output, verb, &args).unwrap()
}

#[test]
fn take_key_scenario() {
    let mut world = world();
    let mut output = Output::new();
    let key = world.thing_by_alias("key").unwrap();

    let outcome = perform(&mut world, &mut output, "take", &["key"]);

    assert_eq!(outcome, ActionOutcome::Done);
    assert!(world.inventory().contains(key));
    assert!(!world.room(world.location()).holds(key));
    assert_eq!(output.log(), "Picked up the Key.\n");
}

#[test]
fn take_statue_scenario() {
    let mut world = world();
    let mut output = Output::new();
    let statue = world.thing_by_alias("statue").unwrap();

    let outcome = perform(&mut world, &mut output, "take", &["statue"]);

    assert_eq!(outcome, ActionOutcome::Refused(Refusal::Immovable));
    assert_eq!(
        Refusal::Immovable.message(),
        "It doesn't seem like you could carry that."
    );
    assert!(world.room(world.location()).holds(statue));
}

#[test]
fn template_sees_every_argument() {
    let mut world = world();
    let mut output = Output::new();

    let outcome = perform(&mut world, &mut output, "put", &["key", "box"]);

    assert_eq!(outcome, ActionOutcome::Done);
    assert_eq!(output.log(), "You put the Key by the Box.\n");
}

#[test]
fn arity_refusals() {
    let mut world = world();
    let mut output = Output::new();

    assert_eq!(
        perform(&mut world, &mut output, "examine", &[]),
        ActionOutcome::Refused(Refusal::NeedsArgument)
    );
    assert_eq!(
        perform(&mut world, &mut output, "examine", &["key", "box"]),
        ActionOutcome::Refused(Refusal::TooManyArguments)
    );
    assert_eq!(
        perform(&mut world, &mut output, "put", &["key"]),
        ActionOutcome::Refused(Refusal::NeedsArgument)
    );
}

#[test]
fn things_out_of_reach_are_not_found() {
    let mut world = world();
    let mut output = Output::new();

    assert_eq!(
        perform(&mut world, &mut output, "examine", &["gem"]),
        ActionOutcome::Refused(Refusal::NotFound)
    );
    assert_eq!(
        perform(&mut world, &mut output, "examine", &["room"]),
        ActionOutcome::Refused(Refusal::UsingRoom)
    );
    assert_eq!(output.log(), "");
}

#[test]
fn carried_things_stay_in_reach() {
    let mut world = world();
    let mut output = Output::new();
    perform(&mut world, &mut output, "take", &["key"]);
    output.drain();

    let vault = world.room_by_identifier("vault").unwrap();
    world.set_location(vault);

    assert_eq!(perform(&mut world, &mut output, "examine", &["key"]), ActionOutcome::Done);
    assert_eq!(output.log(), "A brass key.\n");
}

#[test]
fn delimiters_in_names_stay_inside_their_branch() {
    let content = Content::new()
        .with_room("initial", RoomInfo::new("Start").holding(["key"]))
        .with_thing("key", ThingInfo::item("key", "Key <gold> }"));
    let mut world = World::load(&content, "initial").unwrap();
    let mut output = Output::new();
    let key = world.thing_by_alias("key").unwrap();

    let mut registry = ActionRegistry::new();
    registry.register(Action::new("drop", 1, 1).with_template([
        "ift_{0}@$>rom__+{0}}sys_!Dropped the {0.name}.<sys_!You aren't holding {0.name}.",
    ]));
    let engine = ActionEngine::new(registry, Interpreter::default());
    let args = vec!["key".to_string()];

    engine.perform(&mut world, &mut output, "take", &args).unwrap();
    output.drain();

    let outcome = engine.perform(&mut world, &mut output, "drop", &args).unwrap();
    assert_eq!(outcome, ActionOutcome::Done);
    assert_eq!(output.drain(), "Dropped the Key <gold> }.\n");
    assert!(world.room(world.location()).holds(key));

    engine.perform(&mut world, &mut output, "drop", &args).unwrap();
    assert_eq!(output.drain(), "You aren't holding Key <gold> }.\n");
}

#[test]
fn take_stays_built_in() {
    let mut world = world();
    let mut output = Output::new();
    let key = world.thing_by_alias("key").unwrap();

    let mut registry = ActionRegistry::new();
    registry.register(Action::new("take", 1, 1).with_template(["sys_!You reach for the {0.name}."]));
    let engine = ActionEngine::new(registry, Interpreter::default());

    let outcome = engine
        .perform(&mut world, &mut output, "take", &["key".to_string()])
        .unwrap();

    assert_eq!(outcome, ActionOutcome::Done);
    assert_eq!(output.log(), "Picked up the Key.\n");
    assert!(world.inventory().contains(key));
    assert_eq!(engine.registry().verbs(), vec!["take"]);
}
