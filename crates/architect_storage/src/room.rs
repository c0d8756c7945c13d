//! Room records.

use architect_foundation::{Direction, RoomId, ThingId};
use im::Vector;

/// Text returned when a room has no examine description.
pub const NOTHING_TO_SEE: &str = "There's not much to see here.";

/// A location the player can stand in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    /// Arena identifier.
    pub id: RoomId,
    /// Identifier used by Blueprint and links.
    pub identifier: String,
    /// Display name.
    pub name: String,
    /// Text shown on entry.
    pub entry_desc: String,
    /// Text shown when examined.
    pub examine_desc: String,
    /// Link slots in west, south, north, east order.
    pub links: [Option<RoomId>; 4],
    /// Things lying in the room, in display order.
    pub holding: Vector<ThingId>,
    /// Whether the player has entered the room.
    pub visited: bool,
}

impl Room {
    /// Creates an unlinked, empty room.
    #[must_use]
    pub fn new(id: RoomId, identifier: impl Into<String>) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            name: String::new(),
            entry_desc: String::new(),
            examine_desc: String::new(),
            links: [None; 4],
            holding: Vector::new(),
            visited: false,
        }
    }

    /// Returns the room linked in the given direction.
    #[must_use]
    pub fn link(&self, direction: Direction) -> Option<RoomId> {
        self.links[direction.index()]
    }

    /// Returns true if the thing lies in this room.
    #[must_use]
    pub fn holds(&self, thing: ThingId) -> bool {
        self.holding.contains(&thing)
    }

    /// Removes a thing from the room, returning whether it was present.
    pub fn release(&mut self, thing: ThingId) -> bool {
        match self.holding.index_of(&thing) {
            Some(position) => {
                self.holding.remove(position);
                true
            }
            None => false,
        }
    }

    /// Returns the examine text, falling back to a stock line.
    #[must_use]
    pub fn on_examine(&self) -> &str {
        if self.examine_desc.is_empty() {
            NOTHING_TO_SEE
        } else {
            &self.examine_desc
        }
    }
}
