//! Game configuration.

use architect_language::InterpreterConfig;

/// Room a game starts in unless configured otherwise.
pub const DEFAULT_START_ROOM: &str = "initial";

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Identifier of the room the player starts in.
    pub start_room: String,

    /// Interpreter policy (link mode, nesting bound).
    pub interpreter: InterpreterConfig,

    /// Whether `:`-prefixed input runs as a raw Blueprint instruction.
    pub blueprint_commands: bool,

    /// Whether the REPL prints its banner.
    pub show_banner: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_room: DEFAULT_START_ROOM.to_string(),
            interpreter: InterpreterConfig::default(),
            blueprint_commands: false,
            show_banner: true,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start room.
    #[must_use]
    pub fn with_start_room(mut self, room: impl Into<String>) -> Self {
        self.start_room = room.into();
        self
    }

    /// Sets the interpreter policy.
    #[must_use]
    pub fn with_interpreter(mut self, interpreter: InterpreterConfig) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Enables or disables raw Blueprint input.
    #[must_use]
    pub fn with_blueprint_commands(mut self, enabled: bool) -> Self {
        self.blueprint_commands = enabled;
        self
    }

    /// Enables or disables the REPL banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}
