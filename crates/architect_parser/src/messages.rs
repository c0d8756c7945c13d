//! Fixed player-facing texts.

use std::fmt;

use architect_foundation::ErrorKind;

/// Printed when a session starts.
pub const WELCOME: &str = "Welcome to the demo!";

/// Printed when the player quits.
pub const QUIT: &str = "Game closing.";

/// Heading line of the help text.
pub const HELP_MOVEMENT: &str = "Movement: north, south, east, west";

/// Returns the line printed after a successful `take`.
#[must_use]
pub fn picked_up(name: &str) -> String {
    format!("Picked up the {name}.")
}

/// A player-facing reason a command did nothing.
///
/// Refusals end the turn normally; the world is unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Refusal {
    /// The verb needs more arguments.
    NeedsArgument,
    /// The verb got more arguments than it takes.
    TooManyArguments,
    /// An argument names nothing within reach.
    NotFound,
    /// The thing is already carried.
    AlreadyHolding,
    /// The thing is a prop.
    Immovable,
    /// An argument names a room or the inventory.
    UsingRoom,
    /// The thing has no use for this verb.
    NotForItem,
    /// The target bag is full.
    NoRoom,
    /// The input is not a command.
    InvalidCommand,
    /// There is no exit that way.
    NoExit,
}

impl Refusal {
    /// Returns the text shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Refusal::NeedsArgument => "You need to do something with that.",
            Refusal::TooManyArguments => "That doesn't make sense.",
            Refusal::NotFound => "That thing cannot be found.",
            Refusal::AlreadyHolding => "You've already got one of those.",
            Refusal::Immovable => "It doesn't seem like you could carry that.",
            Refusal::UsingRoom => "You can't do that with an entire room.",
            Refusal::NotForItem => "That item cannot be used that way.",
            Refusal::NoRoom => "There's no room for that.",
            Refusal::InvalidCommand => "Invalid command.",
            Refusal::NoExit => "I can't go that way.",
        }
    }
}

impl Refusal {
    /// Returns the refusal a player-caused error is shown as.
    ///
    /// Errors that point at broken content have no refusal.
    #[must_use]
    pub fn from_error(kind: &ErrorKind) -> Option<Self> {
        match kind {
            ErrorKind::ArgumentArity { min, actual, .. } if actual < min => {
                Some(Refusal::NeedsArgument)
            }
            ErrorKind::ArgumentArity { .. } => Some(Refusal::TooManyArguments),
            ErrorKind::Immovable(_) => Some(Refusal::Immovable),
            ErrorKind::BagFull { .. } => Some(Refusal::NoRoom),
            _ => None,
        }
    }
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
