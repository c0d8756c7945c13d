//! Thing records.

use architect_foundation::ThingId;
use im::{OrdMap, Vector};

/// Whether a thing can be carried.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ThingKind {
    /// Immovable; never enters the inventory.
    Prop,
    /// Portable.
    Item,
}

/// An object the player can interact with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thing {
    /// Arena identifier.
    pub id: ThingId,
    /// Lowercase lookup name.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Text shown while lying in a room.
    pub ground_desc: String,
    /// Text shown when examined.
    pub examine_desc: String,
    /// Prop or item.
    pub kind: ThingKind,
    /// Verb → instruction lines specific to this thing.
    pub actions: OrdMap<String, Vector<String>>,
}

impl Thing {
    /// Creates an item with no descriptions or actions.
    #[must_use]
    pub fn new(id: ThingId, alias: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            name: String::new(),
            ground_desc: String::new(),
            examine_desc: String::new(),
            kind: ThingKind::Item,
            actions: OrdMap::new(),
        }
    }

    /// Returns true if the thing is an immovable prop.
    #[must_use]
    pub fn is_prop(&self) -> bool {
        self.kind == ThingKind::Prop
    }

    /// Returns the instruction lines this thing defines for a verb.
    #[must_use]
    pub fn action(&self, verb: &str) -> Option<&Vector<String>> {
        self.actions.get(verb)
    }
}
