//! The Blueprint interpreter.
//!
//! [`Interpreter::execute`] parses a line, routes it by type code to one of
//! the handlers below, and rolls the world and action log back if anything
//! fails. Conditional branches re-enter the dispatcher one level deeper, up
//! to [`InterpreterConfig::max_depth`].

use architect_foundation::{Direction, Error, ErrorKind, Result, SemanticLimit};
use architect_storage::attribute::leading_code;
use architect_storage::{BagAttribute, RoomAttribute, ThingAttribute, World};
use tracing::{debug, trace};

use crate::alias::{AliasResolver, Entity};
use crate::conditional::{Comparator, Conditional};
use crate::config::InterpreterConfig;
use crate::instruction::Instruction;
use crate::link::link;
use crate::output::Output;
use crate::token::{FunctionalChar, TypeCode};

/// Value of `LIMIT` that removes a bag's capacity.
const NO_LIMIT: &str = "none";

/// Executes Blueprint instructions against a world.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
}

impl Interpreter {
    /// Creates an interpreter with the given configuration.
    #[must_use]
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Executes one instruction.
    ///
    /// On error the world and the action log are left exactly as they were
    /// before the call.
    ///
    /// # Errors
    ///
    /// Returns any parse, resolution, or handler error, with the failing
    /// instruction recorded in the error context.
    pub fn execute(&self, world: &mut World, output: &mut Output, line: &str) -> Result<()> {
        self.execute_all(world, output, [line])
    }

    /// Executes a sequence of instructions as one unit.
    ///
    /// If any instruction fails, the effects of all earlier instructions in
    /// the sequence are undone as well.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn execute_all<I>(&self, world: &mut World, output: &mut Output, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let snapshot = world.clone();
        let mark = output.log_len();

        let result = lines
            .into_iter()
            .try_for_each(|line| self.dispatch(world, output, line.as_ref(), 0));

        if let Err(err) = &result {
            debug!(error = %err, "rolling back");
            *world = snapshot;
            output.truncate_log(mark);
        }
        result
    }

    fn dispatch(&self, world: &mut World, output: &mut Output, line: &str, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            return Err(Error::limit_exceeded(SemanticLimit::MaxDepth {
                limit: self.config.max_depth,
            }));
        }

        let Some(instruction) = Instruction::parse(line).map_err(|e| e.with_frame(line.trim()))? else {
            trace!("pass");
            return Ok(());
        };

        debug!(
            type_code = %instruction.type_code,
            functional = %instruction.functional,
            target = instruction.target,
            depth,
            "dispatching"
        );

        let result = match instruction.type_code {
            TypeCode::System => Self::system(output, &instruction),
            TypeCode::Inventory => Self::inventory(world, &instruction),
            TypeCode::Room => self.room(world, &instruction),
            TypeCode::Object => Self::object(world, &instruction),
            TypeCode::Conditional => self.conditional(world, output, &instruction, depth),
        };
        result.map_err(|e| e.with_frame(instruction.line))
    }

    fn system(output: &mut Output, instruction: &Instruction<'_>) -> Result<()> {
        trace!("system handler");
        if instruction.functional == FunctionalChar::Say {
            output.puts(instruction.params);
        }
        Ok(())
    }

    fn inventory(world: &mut World, instruction: &Instruction<'_>) -> Result<()> {
        trace!("inventory handler");
        match instruction.functional {
            FunctionalChar::Add => {
                let thing = AliasResolver::new(world).thing(instruction.target)?;
                let bag = Some(instruction.params.trim()).filter(|bag| !bag.is_empty());
                world.place_in_inventory(thing, bag)
            }
            FunctionalChar::Remove => {
                let thing = AliasResolver::new(world).thing(instruction.target)?;
                world.remove_from_inventory(thing)
            }
            FunctionalChar::SetAttribute => {
                let bag = instruction.target.trim();
                let Some((BagAttribute::Limit, value)) = BagAttribute::split(instruction.params) else {
                    return Err(Error::attribute_resolution(
                        format!("bag `{bag}`"),
                        leading_code(instruction.params),
                    ));
                };
                let limit = parse_limit(value)?;
                trace!(bag, ?limit, "setting bag limit");
                world.set_bag_limit(bag, limit);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn room(&self, world: &mut World, instruction: &Instruction<'_>) -> Result<()> {
        trace!("room handler");
        let resolver = AliasResolver::new(world);
        let room = resolver.room(instruction.target)?;

        match instruction.functional {
            FunctionalChar::Add => {
                let thing = resolver.thing(instruction.params)?;
                world.place_in_room(thing, room)
            }
            FunctionalChar::Remove => {
                let thing = resolver.thing(instruction.params)?;
                world.remove_from_room(thing, room)
            }
            FunctionalChar::Link => {
                let params = instruction.params.trim_start();
                let mut chars = params.chars();
                let direction = chars
                    .next()
                    .and_then(Direction::from_symbol)
                    .ok_or_else(|| Error::new(ErrorKind::InvalidDirection(params.to_string())))?;
                let destination = resolver.room(chars.as_str())?;
                link(world, room, direction, destination, self.config.euclidean)
            }
            FunctionalChar::SetAttribute => {
                let Some((attribute, value)) = RoomAttribute::split(instruction.params) else {
                    return Err(Error::attribute_resolution(
                        world.room_label(room),
                        leading_code(instruction.params),
                    ));
                };
                trace!(room = %world.room_label(room), ?attribute, value, "setting room attribute");
                world.set_room_attribute(room, attribute, value)
            }
            _ => Ok(()),
        }
    }

    fn object(world: &mut World, instruction: &Instruction<'_>) -> Result<()> {
        trace!("object handler");
        let thing = AliasResolver::new(world).thing(instruction.target)?;

        if instruction.functional != FunctionalChar::SetAttribute {
            return Ok(());
        }
        let Some((attribute, value)) = ThingAttribute::split(instruction.params) else {
            return Err(Error::attribute_resolution(
                world.thing_label(thing),
                leading_code(instruction.params),
            ));
        };
        trace!(thing = %world.thing_label(thing), ?attribute, value, "setting thing attribute");
        world.set_thing_attribute(thing, attribute, value)
    }

    fn conditional(
        &self,
        world: &mut World,
        output: &mut Output,
        instruction: &Instruction<'_>,
        depth: usize,
    ) -> Result<()> {
        trace!("conditional handler");
        let comparator = Comparator::from_functional(instruction.functional)?;
        let conditional = Conditional::parse(instruction.params)?;

        let resolver = AliasResolver::new(world);
        let subject = resolver.resolve(instruction.target)?;
        let comparand = resolver.resolve(&conditional.comparand)?;

        let outcome = match comparator {
            Comparator::Identical => subject == comparand,
            Comparator::Holds => match subject {
                Entity::Thing(thing) => resolver.holds(comparand, thing)?,
                // Rooms and the inventory are never held.
                Entity::Room(_) | Entity::Inventory => {
                    resolver.require_container(comparand)?;
                    false
                }
            },
        };

        self.run_branch(world, output, &conditional, outcome, depth)
    }

    fn run_branch(
        &self,
        world: &mut World,
        output: &mut Output,
        conditional: &Conditional,
        outcome: bool,
        depth: usize,
    ) -> Result<()> {
        trace!(outcome, "taking branch");
        conditional
            .branch(outcome)
            .iter()
            .try_for_each(|line| self.dispatch(world, output, line, depth + 1))
    }
}

fn parse_limit(value: &str) -> Result<Option<usize>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(NO_LIMIT) {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| Error::invalid_content(format!("`{value}` is not a bag limit")))
}
