//! Integration tests for command classification

use architect_foundation::Direction;
use architect_parser::{Action, ActionRegistry, Command, InputTokenizer};

fn registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry.register(Action::new("put", 2, 2));
    registry.register(Action::new("examine", 1, 1));
    registry
}

#[test]
fn punctuation_and_case_are_ignored() {
    assert_eq!(InputTokenizer::words("Take the KEY!"), vec!["take", "the", "key"]);
    assert_eq!(
        Command::parse("Examine, the statue.", &registry()),
        Command::Act {
            verb: "examine".to_string(),
            args: vec!["statue".to_string()],
        }
    );
}

#[test]
fn two_argument_verbs_keep_order() {
    assert_eq!(
        Command::parse("put the key in the box", &registry()),
        Command::Act {
            verb: "put".to_string(),
            args: vec!["key".to_string(), "box".to_string()],
        }
    );
}

#[test]
fn every_movement_form() {
    for (input, direction) in [
        ("n", Direction::North),
        ("south", Direction::South),
        ("go e", Direction::East),
        ("GO WEST", Direction::West),
    ] {
        assert_eq!(Command::parse(input, &registry()), Command::Move(direction), "{input}");
    }
}

#[test]
fn verbs_not_registered_are_unknown() {
    assert!(matches!(
        Command::parse("sing loudly", &registry()),
        Command::Unknown(_)
    ));
    assert!(matches!(
        Command::parse("take", &registry()),
        Command::Act { ref verb, ref args } if verb == "take" && args.is_empty()
    ));
}
