//! Symbolic name resolution.
//!
//! Every raw token in a Blueprint line that names an entity goes through
//! [`AliasResolver::resolve`]:
//!
//! | Token           | Entity             |
//! |-----------------|--------------------|
//! | `_`             | the current room   |
//! | `$`             | the inventory      |
//! | room identifier | that room          |
//! | thing alias     | that thing         |
//!
//! Room identifiers are checked before thing aliases.

use architect_foundation::{Error, Result, RoomId, ThingId};
use architect_storage::World;

/// Token for the current room.
pub const CURRENT_ROOM: &str = "_";

/// Token for the player's inventory.
pub const INVENTORY: &str = "$";

/// A live reference produced by alias resolution.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Entity {
    /// A room.
    Room(RoomId),
    /// A thing.
    Thing(ThingId),
    /// The player's inventory.
    Inventory,
}

/// Resolves tokens against one world snapshot.
#[derive(Copy, Clone, Debug)]
pub struct AliasResolver<'w> {
    world: &'w World,
}

impl<'w> AliasResolver<'w> {
    /// Creates a resolver over the given world.
    #[must_use]
    pub const fn new(world: &'w World) -> Self {
        Self { world }
    }

    /// Resolves a token to an entity.
    ///
    /// # Errors
    ///
    /// Returns a name-resolution error if the token names nothing.
    pub fn resolve(&self, token: &str) -> Result<Entity> {
        let token = token.trim();
        match token {
            CURRENT_ROOM => Ok(Entity::Room(self.world.location())),
            INVENTORY => Ok(Entity::Inventory),
            _ => self
                .world
                .room_by_identifier(token)
                .map(Entity::Room)
                .or_else(|| self.world.thing_by_alias(token).map(Entity::Thing))
                .ok_or_else(|| Error::name_resolution(token)),
        }
    }

    /// Resolves a token that must name a room.
    ///
    /// # Errors
    ///
    /// Returns a name-resolution error, or a capability error if the token
    /// names something other than a room.
    pub fn room(&self, token: &str) -> Result<RoomId> {
        match self.resolve(token)? {
            Entity::Room(room) => Ok(room),
            other => Err(Error::capability(self.describe(other), "room")),
        }
    }

    /// Resolves a token that must name a thing.
    ///
    /// # Errors
    ///
    /// Returns a name-resolution error, or a capability error if the token
    /// names something other than a thing.
    pub fn thing(&self, token: &str) -> Result<ThingId> {
        match self.resolve(token)? {
            Entity::Thing(thing) => Ok(thing),
            other => Err(Error::capability(self.describe(other), "thing")),
        }
    }

    /// Returns a short label for an entity, used in diagnostics.
    #[must_use]
    pub fn describe(&self, entity: Entity) -> String {
        match entity {
            Entity::Room(room) => self.world.room_label(room),
            Entity::Thing(thing) => self.world.thing_label(thing),
            Entity::Inventory => "inventory".to_string(),
        }
    }

    /// Returns true if the entity is a container holding the thing.
    ///
    /// # Errors
    ///
    /// Returns a capability error if the entity is a thing.
    pub fn holds(&self, container: Entity, thing: ThingId) -> Result<bool> {
        self.require_container(container)?;
        Ok(match container {
            Entity::Room(room) => self.world.room(room).holds(thing),
            Entity::Inventory => self.world.inventory().contains(thing),
            Entity::Thing(_) => false,
        })
    }

    /// Checks that an entity has a holding set.
    ///
    /// # Errors
    ///
    /// Returns a capability error if the entity is a thing.
    pub fn require_container(&self, entity: Entity) -> Result<()> {
        match entity {
            Entity::Room(_) | Entity::Inventory => Ok(()),
            Entity::Thing(_) => Err(Error::capability(self.describe(entity), "holding")),
        }
    }
}
