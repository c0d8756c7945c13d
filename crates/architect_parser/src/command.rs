//! Command classification.
//!
//! Sorts one line of player input into the command surface: movement, the
//! inventory/look/help/quit menu words, registered verbs, and raw Blueprint.

use architect_foundation::Direction;

use crate::action::ActionRegistry;
use crate::tokenizer::InputTokenizer;

/// Prefix marking a raw Blueprint instruction.
pub const BLUEPRINT_PREFIX: char = ':';

/// Words dropped from action arguments.
pub const FILLER_WORDS: &[&str] = &[
    "the", "a", "an", "with", "on", "in", "to", "at", "from", "into",
];

/// A classified line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Nothing was typed.
    Empty,
    /// `n`, `north`, `go north`, ...
    Move(Direction),
    /// `i`, `inv`, `inventory`
    Inventory,
    /// `l`, `look`
    Look,
    /// `?`, `help`
    Help,
    /// `q`, `quit`
    Quit,
    /// `:<instruction>`
    Blueprint(String),
    /// A verb and its argument tokens, filler words removed.
    Act {
        /// Verb
        verb: String,
        /// Argument tokens
        args: Vec<String>,
    },
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Classifies a line of input.
    #[must_use]
    pub fn parse(input: &str, actions: &ActionRegistry) -> Self {
        let trimmed = input.trim();
        if let Some(instruction) = trimmed.strip_prefix(BLUEPRINT_PREFIX) {
            return Command::Blueprint(instruction.trim().to_string());
        }

        let words = InputTokenizer::words(trimmed);
        let Some((first, rest)) = words.split_first() else {
            return Command::Empty;
        };

        match first.as_str() {
            "go" => match rest.first().and_then(|word| Direction::from_word(word)) {
                Some(direction) => Command::Move(direction),
                None => Command::Unknown(trimmed.to_string()),
            },
            "i" | "inv" | "inventory" => Command::Inventory,
            "l" | "look" => Command::Look,
            "?" | "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            word => {
                if let Some(direction) = Direction::from_word(word) {
                    Command::Move(direction)
                } else if actions.is_verb(word) {
                    Command::Act {
                        verb: word.to_string(),
                        args: rest
                            .iter()
                            .filter(|arg| !FILLER_WORDS.contains(&arg.as_str()))
                            .cloned()
                            .collect(),
                    }
                } else {
                    Command::Unknown(trimmed.to_string())
                }
            }
        }
    }
}
