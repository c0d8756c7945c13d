//! Session state for one running game.
//!
//! A session owns the world, the output buffers, and the action engine.
//! Each call to [`Session::submit`] is one player turn; the driver reads the
//! result with [`Session::gets`].

use architect_foundation::{Direction, Result};
use architect_language::{Interpreter, Output};
use architect_parser::messages::{HELP_MOVEMENT, QUIT, WELCOME};
use architect_parser::{ActionEngine, ActionOutcome, ActionRegistry, Command, Refusal};
use architect_storage::{Content, World};
use tracing::{debug, error, info};

use crate::config::GameConfig;

/// Words the player can type besides verbs.
const COMMAND_WORDS: &[&str] = &[
    "north",
    "south",
    "east",
    "west",
    "go",
    "inventory",
    "look",
    "help",
    "quit",
];

/// One game in progress.
pub struct Session {
    /// The current world state.
    world: World,

    /// Setting and action-log buffers.
    output: Output,

    /// Verbs and the interpreter they run on.
    engine: ActionEngine,

    /// Configuration the session was started with.
    config: GameConfig,

    /// Set once the player quits.
    finished: bool,
}

impl Session {
    /// Loads a game from content and runs its start-up instructions.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is inconsistent or a start-up
    /// instruction fails.
    pub fn new(content: &Content, config: GameConfig) -> Result<Self> {
        let mut world = World::load(content, &config.start_room)?;
        let mut output = Output::new();
        let interpreter = Interpreter::new(config.interpreter.clone());

        if let Err(err) = interpreter.execute_all(&mut world, &mut output, &content.setup) {
            error!(error = %err, context = ?err.context, "start-up instructions failed");
            return Err(err);
        }

        let engine = ActionEngine::new(ActionRegistry::from_content(content), interpreter);
        info!(
            start = %config.start_room,
            verbs = engine.registry().verbs().len(),
            "session created"
        );

        Ok(Self {
            world,
            output,
            engine,
            config,
            finished: false,
        })
    }

    /// Returns the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the world for direct modification.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Returns the output buffers.
    #[must_use]
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the action engine.
    #[must_use]
    pub fn engine(&self) -> &ActionEngine {
        &self.engine
    }

    /// Returns true once the player has quit.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Prints the welcome message and the first setting.
    pub fn start(&mut self) {
        self.output.puts(WELCOME);
        self.refresh_setting();
    }

    /// Runs one player turn.
    ///
    /// Player mistakes are answered with a message in the action log and
    /// return `Ok`.
    ///
    /// # Errors
    ///
    /// Returns an error if game content is malformed. The world and the
    /// action log are left as they were before the turn.
    pub fn submit(&mut self, input: &str) -> Result<()> {
        let command = Command::parse(input, self.engine.registry());
        debug!(?command, "submitting command");

        match command {
            Command::Empty => {}
            Command::Move(direction) => self.go(direction),
            Command::Inventory => self.open_inventory(),
            Command::Look => {
                let text = self.world.room(self.world.location()).on_examine().to_string();
                self.output.puts(&text);
            }
            Command::Help => self.help(),
            Command::Quit => {
                self.output.puts(QUIT);
                self.finished = true;
            }
            Command::Blueprint(line) => {
                if !self.config.blueprint_commands {
                    self.refuse(Refusal::InvalidCommand);
                    return Ok(());
                }
                let interpreter = self.engine.interpreter();
                if let Err(err) = interpreter.execute(&mut self.world, &mut self.output, &line) {
                    error!(line, error = %err, context = ?err.context, "instruction failed");
                    return Err(err);
                }
            }
            Command::Act { verb, args } => {
                let outcome = self
                    .engine
                    .perform(&mut self.world, &mut self.output, &verb, &args)?;
                if let ActionOutcome::Refused(refusal) = outcome {
                    self.refuse(refusal);
                }
            }
            Command::Unknown(_) => self.refuse(Refusal::InvalidCommand),
        }
        Ok(())
    }

    /// Returns the current setting and everything printed since the last
    /// call, clearing the action log.
    pub fn gets(&mut self) -> String {
        self.refresh_setting();
        let mut text = self.output.setting().to_string();
        text.push('\n');
        text.push_str(&self.output.drain());
        text
    }

    /// Returns words worth offering for tab completion.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        self.engine
            .registry()
            .verbs()
            .into_iter()
            .chain(COMMAND_WORDS.iter().copied())
            .map(str::to_string)
            .collect()
    }

    fn go(&mut self, direction: Direction) {
        match self.world.room(self.world.location()).link(direction) {
            Some(destination) => {
                debug!(%direction, room = %self.world.room_label(destination), "moving");
                self.world.set_location(destination);
                self.refresh_setting();
            }
            None => self.refuse(Refusal::NoExit),
        }
    }

    fn open_inventory(&mut self) {
        let inventory = self.world.inventory();
        if inventory.is_empty() && inventory.bags().next().is_none() {
            self.output.puts("You aren't carrying anything.");
            return;
        }

        let mut lines = vec!["You are carrying:".to_string()];
        for thing in inventory.loose() {
            lines.push(format!("  {}", self.world.thing(thing).name));
        }
        for bag in inventory.bags() {
            let capacity = match bag.limit {
                Some(limit) => format!("{}/{limit}", bag.holding.len()),
                None => bag.holding.len().to_string(),
            };
            lines.push(format!("  {} ({capacity}):", bag.name));
            for &thing in &bag.holding {
                lines.push(format!("    {}", self.world.thing(thing).name));
            }
        }
        for line in lines {
            self.output.puts(&line);
        }
    }

    fn help(&mut self) {
        let actions = format!("Actions: {}", self.engine.registry().verbs().join(", "));
        self.output.puts(HELP_MOVEMENT);
        self.output.puts(&actions);
    }

    fn refuse(&mut self, refusal: Refusal) {
        debug!(?refusal, "command refused");
        self.output.puts(refusal.message());
    }

    /// Rebuilds the setting from the current room.
    fn refresh_setting(&mut self) {
        let room = self.world.room(self.world.location());
        let mut setting = room.entry_desc.clone();
        setting.push('\n');
        for &thing in &room.holding {
            let ground = &self.world.thing(thing).ground_desc;
            if !ground.is_empty() {
                setting.push_str(ground);
                setting.push('\n');
            }
        }
        self.output.set_setting(setting);
    }
}
