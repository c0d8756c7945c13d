//! Raw content records.
//!
//! A content loader (file format, editor, test fixture) produces these
//! records; the world is built from them and never reads files itself.

use std::collections::BTreeMap;

use architect_foundation::Direction;

/// Raw fields describing one room.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomInfo {
    /// `IDEN`: identifier; the map key is used when empty.
    pub iden: String,
    /// `NAME`: display name.
    pub name: String,
    /// `DESC`: text shown on entry.
    pub desc: String,
    /// `EXAM`: text shown when the room is examined.
    pub exam: String,
    /// `HOLD`: aliases of held things separated by `|`.
    pub hold: String,
    /// `L`: destination identifiers in west, south, north, east order.
    pub links: [String; 4],
}

impl RoomInfo {
    /// Creates a room record with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_iden(mut self, iden: impl Into<String>) -> Self {
        self.iden = iden.into();
        self
    }

    /// Sets the entry description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Sets the examine description.
    #[must_use]
    pub fn with_exam(mut self, exam: impl Into<String>) -> Self {
        self.exam = exam.into();
        self
    }

    /// Sets the held aliases from a list.
    #[must_use]
    pub fn holding<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hold = aliases
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        self
    }

    /// Sets one link slot.
    #[must_use]
    pub fn with_link(mut self, direction: Direction, destination: impl Into<String>) -> Self {
        self.links[direction.index()] = destination.into();
        self
    }

    /// Returns the held aliases, trimmed, with empty entries dropped.
    pub fn held_aliases(&self) -> impl Iterator<Item = &str> {
        self.hold.split('|').map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Raw fields describing one thing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThingInfo {
    /// Short lookup name typed by the player.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Text shown while the thing lies in a room.
    pub ground_desc: String,
    /// Text shown when the thing is examined.
    pub examine_desc: String,
    /// Whether the thing is an immovable prop.
    pub is_prop: bool,
    /// Verb → instruction lines specific to this thing.
    pub actions: BTreeMap<String, Vec<String>>,
}

impl ThingInfo {
    /// Creates a portable item.
    #[must_use]
    pub fn item(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an immovable prop.
    #[must_use]
    pub fn prop(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_prop: true,
            ..Self::item(alias, name)
        }
    }

    /// Sets the ground description.
    #[must_use]
    pub fn with_ground(mut self, desc: impl Into<String>) -> Self {
        self.ground_desc = desc.into();
        self
    }

    /// Sets the examine description.
    #[must_use]
    pub fn with_examine(mut self, desc: impl Into<String>) -> Self {
        self.examine_desc = desc.into();
        self
    }

    /// Adds an action-table entry.
    #[must_use]
    pub fn with_action<I, S>(mut self, verb: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions
            .insert(verb.into(), lines.into_iter().map(Into::into).collect());
        self
    }
}

/// Raw fields describing one player verb.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionInfo {
    /// Fewest arguments the verb accepts.
    pub min_args: usize,
    /// Most arguments the verb accepts.
    pub max_args: usize,
    /// Instruction template run when no thing overrides the verb.
    pub template: Vec<String>,
}

impl ActionInfo {
    /// Creates a verb taking between `min_args` and `max_args` arguments.
    #[must_use]
    pub fn new(min_args: usize, max_args: usize) -> Self {
        Self {
            min_args,
            max_args,
            template: Vec::new(),
        }
    }

    /// Sets the instruction template.
    #[must_use]
    pub fn with_template<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template = lines.into_iter().map(Into::into).collect();
        self
    }
}

/// The three raw mappings a game is built from, plus start-up instructions.
#[derive(Clone, Debug, Default)]
pub struct Content {
    /// Room key → room record.
    pub rooms: BTreeMap<String, RoomInfo>,
    /// Thing key → thing record.
    pub things: BTreeMap<String, ThingInfo>,
    /// Verb → action record.
    pub actions: BTreeMap<String, ActionInfo>,
    /// Blueprint lines run once when a game starts, e.g. to create bags.
    pub setup: Vec<String>,
}

impl Content {
    /// Creates empty content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room record.
    #[must_use]
    pub fn with_room(mut self, key: impl Into<String>, room: RoomInfo) -> Self {
        self.rooms.insert(key.into(), room);
        self
    }

    /// Adds a thing record.
    #[must_use]
    pub fn with_thing(mut self, key: impl Into<String>, thing: ThingInfo) -> Self {
        self.things.insert(key.into(), thing);
        self
    }

    /// Adds an action record.
    #[must_use]
    pub fn with_action(mut self, verb: impl Into<String>, action: ActionInfo) -> Self {
        self.actions.insert(verb.into(), action);
        self
    }

    /// Appends a start-up instruction.
    #[must_use]
    pub fn with_setup(mut self, line: impl Into<String>) -> Self {
        self.setup.push(line.into());
        self
    }
}
