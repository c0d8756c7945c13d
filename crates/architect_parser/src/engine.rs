//! Argument resolution and execution of actions.
//!
//! `take` moves a thing straight from the current room into the inventory.
//! Every other verb resolves its arguments to things within reach, picks the
//! instruction lines (the first argument's own entry for the verb, else the
//! verb's template), expands placeholders, and runs the lines as one unit.

use architect_foundation::{Error, Result, ThingId};
use architect_language::{AliasResolver, Entity, Interpreter, Output};
use architect_storage::World;
use tracing::{debug, error};

use crate::action::{ActionRegistry, TAKE};
use crate::messages::{Refusal, picked_up};
use crate::template::interpolate;

/// Argument word that always means the current room.
const ROOM_WORD: &str = "room";

/// Result of performing an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran
    Done,
    /// The action was refused with a player-facing reason
    Refused(Refusal),
}

/// Runs player verbs against a world.
#[derive(Clone, Debug, Default)]
pub struct ActionEngine {
    registry: ActionRegistry,
    interpreter: Interpreter,
}

impl ActionEngine {
    /// Creates an engine over the given verbs.
    #[must_use]
    pub fn new(registry: ActionRegistry, interpreter: Interpreter) -> Self {
        Self {
            registry,
            interpreter,
        }
    }

    /// Returns the verb registry.
    #[must_use]
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Returns the interpreter used to run instructions.
    #[must_use]
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Performs a verb with the given argument tokens.
    ///
    /// Refusals leave the world and output untouched; the caller decides how
    /// to show them.
    ///
    /// # Errors
    ///
    /// Returns an error if the verb's instructions are malformed or fail for
    /// a reason the player cannot cause. The world is rolled back.
    pub fn perform(
        &self,
        world: &mut World,
        output: &mut Output,
        verb: &str,
        args: &[String],
    ) -> Result<ActionOutcome> {
        debug!(verb, ?args, "performing action");
        if verb == TAKE {
            return Self::take(world, output, args);
        }

        let Some(action) = self.registry.get(verb) else {
            return Ok(ActionOutcome::Refused(Refusal::InvalidCommand));
        };
        if let Err(err) = action.check_arity(args.len()) {
            return refuse_or_fail(verb, err);
        }
        let things = match resolve_arguments(world, args) {
            Ok(things) => things,
            Err(refusal) => return Ok(ActionOutcome::Refused(refusal)),
        };

        let lines: Vec<String> = match things.first().and_then(|&t| world.thing(t).action(verb)) {
            Some(own) => own.iter().cloned().collect(),
            None if things.is_empty() || !action.template.is_empty() => action.template.clone(),
            None => return Ok(ActionOutcome::Refused(Refusal::NotForItem)),
        };
        if lines.is_empty() {
            return Ok(ActionOutcome::Refused(Refusal::NotForItem));
        }

        let expanded: Vec<String> = lines
            .iter()
            .map(|line| interpolate(line, &things, world))
            .collect();

        match self.interpreter.execute_all(world, output, &expanded) {
            Ok(()) => Ok(ActionOutcome::Done),
            Err(err) => refuse_or_fail(verb, err),
        }
    }

    fn take(world: &mut World, output: &mut Output, args: &[String]) -> Result<ActionOutcome> {
        let token = match args {
            [] => return Ok(ActionOutcome::Refused(Refusal::NeedsArgument)),
            [token] => token,
            _ => return Ok(ActionOutcome::Refused(Refusal::TooManyArguments)),
        };

        let thing = match resolve_argument(world, token) {
            Ok(thing) => thing,
            Err(refusal) => return Ok(ActionOutcome::Refused(refusal)),
        };
        if world.inventory().contains(thing) {
            return Ok(ActionOutcome::Refused(Refusal::AlreadyHolding));
        }
        if !world.room(world.location()).holds(thing) {
            return Ok(ActionOutcome::Refused(Refusal::NotFound));
        }
        if world.thing(thing).is_prop() {
            return Ok(ActionOutcome::Refused(Refusal::Immovable));
        }

        world.place_in_inventory(thing, None)?;
        output.puts(&picked_up(&world.thing(thing).name));
        Ok(ActionOutcome::Done)
    }
}

/// Turns a player-caused error into a refusal and logs anything else.
fn refuse_or_fail(verb: &str, err: Error) -> Result<ActionOutcome> {
    match Refusal::from_error(&err.kind) {
        Some(refusal) => Ok(ActionOutcome::Refused(refusal)),
        None => {
            error!(verb, error = %err, context = ?err.context, "action failed");
            Err(err)
        }
    }
}

/// Resolves every argument token to a thing within reach.
fn resolve_arguments(world: &World, args: &[String]) -> std::result::Result<Vec<ThingId>, Refusal> {
    args.iter().map(|token| resolve_argument(world, token)).collect()
}

/// Resolves one argument token.
///
/// The thing must be in the current room or the inventory. Rooms and the
/// inventory itself are refused.
fn resolve_argument(world: &World, token: &str) -> std::result::Result<ThingId, Refusal> {
    if token == ROOM_WORD {
        return Err(Refusal::UsingRoom);
    }
    match AliasResolver::new(world).resolve(token) {
        Ok(Entity::Thing(thing)) => {
            let in_reach = world.room(world.location()).holds(thing)
                || world.inventory().contains(thing);
            if in_reach {
                Ok(thing)
            } else {
                Err(Refusal::NotFound)
            }
        }
        Ok(Entity::Room(_) | Entity::Inventory) => Err(Refusal::UsingRoom),
        Err(_) => Err(Refusal::NotFound),
    }
}
