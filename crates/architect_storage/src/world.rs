//! World state with cheap snapshots.
//!
//! The `World` owns every room and thing in arenas addressed by
//! [`RoomId`]/[`ThingId`], the player's inventory, and the current location.
//! It uses persistent data structures, so `clone()` is O(1) and a clone taken
//! before a mutation is a complete snapshot to roll back to.

use std::collections::HashSet;

use architect_foundation::{Direction, Error, ErrorKind, Result, RoomId, ThingId};
use im::{HashMap, Vector};
use tracing::debug;

use crate::attribute::{RoomAttribute, ThingAttribute, parse_flag};
use crate::info::{Content, RoomInfo, ThingInfo};
use crate::inventory::Inventory;
use crate::room::Room;
use crate::thing::{Thing, ThingKind};

/// Where a thing currently is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Container {
    /// Lying in a room.
    Room(RoomId),
    /// Carried by the player, loose or in a bag.
    Inventory,
}

/// Persistent snapshot of game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    rooms: Vector<Room>,
    things: Vector<Thing>,
    room_index: HashMap<String, RoomId>,
    alias_index: HashMap<String, ThingId>,
    inventory: Inventory,
    location: RoomId,
}

impl World {
    /// Builds a world from raw content, starting in the given room.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidContent`] if identifiers or aliases collide,
    /// a link or holding names something that does not exist, a thing is held
    /// by two rooms, or the start room is missing.
    pub fn load(content: &Content, start_room: &str) -> Result<Self> {
        let mut things = Vector::new();
        let mut alias_index = HashMap::new();
        for (key, info) in &content.things {
            let id = ThingId::new(u32::try_from(things.len()).map_err(|_| too_many("things"))?);
            let thing = build_thing(id, key, info);
            if alias_index.insert(thing.alias.clone(), id).is_some() {
                return Err(Error::invalid_content(format!(
                    "alias `{}` is used by more than one thing",
                    thing.alias
                )));
            }
            things.push_back(thing);
        }

        let mut rooms = Vector::new();
        let mut room_index = HashMap::new();
        for (key, info) in &content.rooms {
            let id = RoomId::new(u32::try_from(rooms.len()).map_err(|_| too_many("rooms"))?);
            let room = build_room(id, key, info);
            if room_index.insert(room.identifier.clone(), id).is_some() {
                return Err(Error::invalid_content(format!(
                    "room identifier `{}` is used more than once",
                    room.identifier
                )));
            }
            rooms.push_back(room);
        }

        let Some(&location) = room_index.get(start_room) else {
            return Err(Error::invalid_content(format!(
                "starting room `{start_room}` does not exist"
            )));
        };

        let mut world = Self {
            rooms,
            things,
            room_index,
            alias_index,
            inventory: Inventory::new(),
            location,
        };
        world.populate(content)?;
        world.rooms[location.index()].visited = true;

        debug!(
            rooms = world.rooms.len(),
            things = world.things.len(),
            start = start_room,
            "world loaded"
        );
        Ok(world)
    }

    /// Resolves links and holdings once every room and thing exists.
    fn populate(&mut self, content: &Content) -> Result<()> {
        let mut placed = HashSet::new();
        for (index, info) in content.rooms.values().enumerate() {
            let identifier = self.rooms[index].identifier.clone();

            for direction in Direction::ALL {
                let destination = info.links[direction.index()].trim();
                if destination.is_empty() {
                    continue;
                }
                let target = self.room_by_identifier(destination).ok_or_else(|| {
                    Error::invalid_content(format!(
                        "room `{identifier}` links {direction} to unknown room `{destination}`"
                    ))
                })?;
                self.rooms[index].links[direction.index()] = Some(target);
            }

            for alias in info.held_aliases() {
                let thing = self.thing_by_alias(alias).ok_or_else(|| {
                    Error::invalid_content(format!(
                        "room `{identifier}` holds unknown thing `{alias}`"
                    ))
                })?;
                if !placed.insert(thing) {
                    return Err(Error::invalid_content(format!(
                        "thing `{alias}` is held more than once"
                    )));
                }
                self.rooms[index].holding.push_back(thing);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns a room by arena id.
    ///
    /// Ids are only handed out by this world and rooms are never destroyed.
    #[must_use]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Returns a thing by arena id.
    #[must_use]
    pub fn thing(&self, id: ThingId) -> &Thing {
        &self.things[id.index()]
    }

    /// Looks up a room by identifier.
    #[must_use]
    pub fn room_by_identifier(&self, identifier: &str) -> Option<RoomId> {
        self.room_index.get(identifier).copied()
    }

    /// Looks up a thing by alias, ignoring case.
    #[must_use]
    pub fn thing_by_alias(&self, alias: &str) -> Option<ThingId> {
        self.alias_index.get(&alias.to_lowercase()).copied()
    }

    /// Returns all rooms in arena order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Returns all things in arena order.
    pub fn things(&self) -> impl Iterator<Item = &Thing> {
        self.things.iter()
    }

    /// Returns the player's inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the current room.
    #[must_use]
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// Moves the player and marks the destination visited.
    pub fn set_location(&mut self, room: RoomId) {
        self.location = room;
        self.rooms[room.index()].visited = true;
    }

    /// Returns the container currently holding a thing.
    #[must_use]
    pub fn container_of(&self, thing: ThingId) -> Option<Container> {
        if self.inventory.contains(thing) {
            return Some(Container::Inventory);
        }
        self.rooms
            .iter()
            .find(|room| room.holds(thing))
            .map(|room| Container::Room(room.id))
    }

    /// Label used for a room in diagnostics.
    #[must_use]
    pub fn room_label(&self, id: RoomId) -> String {
        self.room(id).identifier.clone()
    }

    /// Label used for a thing in diagnostics.
    #[must_use]
    pub fn thing_label(&self, id: ThingId) -> String {
        self.thing(id).alias.clone()
    }

    // =========================================================================
    // Containment
    // =========================================================================

    /// Puts a thing in a room, taking it out of its previous container.
    ///
    /// # Errors
    ///
    /// This currently cannot fail; the signature matches the other transfers.
    pub fn place_in_room(&mut self, thing: ThingId, room: RoomId) -> Result<()> {
        if self.room(room).holds(thing) {
            return Ok(());
        }
        self.detach(thing);
        self.rooms[room.index()].holding.push_back(thing);
        Ok(())
    }

    /// Removes a thing from a room.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ItemNotFound`] if the room does not hold it.
    pub fn remove_from_room(&mut self, thing: ThingId, room: RoomId) -> Result<()> {
        if self.rooms[room.index()].release(thing) {
            Ok(())
        } else {
            Err(Error::item_not_found(
                self.thing_label(thing),
                self.room_label(room),
            ))
        }
    }

    /// Puts a thing in the inventory, loose or in a bag, taking it out of its
    /// previous container.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Immovable`] for props, and a capability or
    /// [`ErrorKind::BagFull`] error if the bag is missing or full. The world
    /// is unchanged on error.
    pub fn place_in_inventory(&mut self, thing: ThingId, bag: Option<&str>) -> Result<()> {
        let record = self.thing(thing);
        if record.is_prop() {
            return Err(Error::new(ErrorKind::Immovable(record.name.clone())));
        }
        if self.inventory.contains(thing) && self.inventory.bag_of(thing) == bag {
            return Ok(());
        }
        if let Some(name) = bag {
            let target = self
                .inventory
                .bag(name)
                .ok_or_else(|| Error::capability(format!("bag `{name}`"), "existing bag"))?;
            if let Some(limit) = target.limit.filter(|_| target.is_full()) {
                return Err(Error::new(ErrorKind::BagFull {
                    bag: name.to_string(),
                    limit,
                }));
            }
        }
        self.detach(thing);
        self.inventory.add(thing, bag)
    }

    /// Removes a thing from the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ItemNotFound`] if it is not carried.
    pub fn remove_from_inventory(&mut self, thing: ThingId) -> Result<()> {
        if self.inventory.remove(thing) {
            Ok(())
        } else {
            Err(Error::item_not_found(self.thing_label(thing), "inventory"))
        }
    }

    /// Creates or resizes an inventory bag.
    pub fn set_bag_limit(&mut self, bag: &str, limit: Option<usize>) {
        self.inventory.set_limit(bag, limit);
    }

    /// Takes a thing out of whatever container holds it.
    fn detach(&mut self, thing: ThingId) {
        if self.inventory.remove(thing) {
            return;
        }
        if let Some(Container::Room(room)) = self.container_of(thing) {
            self.rooms[room.index()].release(thing);
        }
    }

    // =========================================================================
    // Links and attributes
    // =========================================================================

    /// Sets or clears one link slot of a room.
    pub fn set_link(&mut self, room: RoomId, direction: Direction, destination: Option<RoomId>) {
        self.rooms[room.index()].links[direction.index()] = destination;
    }

    /// Sets a room attribute from its textual value.
    ///
    /// `HOLD` takes `|`-separated thing aliases; the listed things are moved
    /// into the room and things no longer listed are left in no container.
    ///
    /// # Errors
    ///
    /// Returns an error if a new identifier is taken or a held alias is unknown.
    pub fn set_room_attribute(
        &mut self,
        room: RoomId,
        attribute: RoomAttribute,
        value: &str,
    ) -> Result<()> {
        match attribute {
            RoomAttribute::Identifier => {
                let old = self.room_label(room);
                if old == value {
                    return Ok(());
                }
                if self.room_index.contains_key(value) {
                    return Err(Error::invalid_content(format!(
                        "room identifier `{value}` is already in use"
                    )));
                }
                self.room_index.remove(&old);
                self.room_index.insert(value.to_string(), room);
                self.rooms[room.index()].identifier = value.to_string();
            }
            RoomAttribute::Name => self.rooms[room.index()].name = value.to_string(),
            RoomAttribute::EntryDesc => self.rooms[room.index()].entry_desc = value.to_string(),
            RoomAttribute::ExamineDesc => {
                self.rooms[room.index()].examine_desc = value.to_string();
            }
            RoomAttribute::Holding => {
                let probe = RoomInfo {
                    hold: value.to_string(),
                    ..RoomInfo::default()
                };
                let held = probe
                    .held_aliases()
                    .map(|alias| {
                        self.thing_by_alias(alias)
                            .ok_or_else(|| Error::name_resolution(alias))
                    })
                    .collect::<Result<Vec<_>>>()?;

                self.rooms[room.index()].holding = Vector::new();
                for thing in held {
                    self.place_in_room(thing, room)?;
                }
            }
        }
        Ok(())
    }

    /// Sets a thing attribute from its textual value.
    ///
    /// # Errors
    ///
    /// Returns an error if a new alias is taken, a prop flag is unreadable,
    /// or a carried thing would become a prop.
    pub fn set_thing_attribute(
        &mut self,
        thing: ThingId,
        attribute: ThingAttribute,
        value: &str,
    ) -> Result<()> {
        let index = thing.index();
        match attribute {
            ThingAttribute::Alias => {
                let alias = value.trim().to_lowercase();
                let old = self.thing_label(thing);
                if old == alias {
                    return Ok(());
                }
                if alias.is_empty() || self.alias_index.contains_key(&alias) {
                    return Err(Error::invalid_content(format!(
                        "alias `{alias}` is empty or already in use"
                    )));
                }
                self.alias_index.remove(&old);
                self.alias_index.insert(alias.clone(), thing);
                self.things[index].alias = alias;
            }
            ThingAttribute::Name => self.things[index].name = value.to_string(),
            ThingAttribute::GroundDesc => self.things[index].ground_desc = value.to_string(),
            ThingAttribute::ExamineDesc => self.things[index].examine_desc = value.to_string(),
            ThingAttribute::Prop => {
                let is_prop = parse_flag(value).ok_or_else(|| {
                    Error::invalid_content(format!("`{value}` is not a prop flag"))
                })?;
                if is_prop && self.inventory.contains(thing) {
                    return Err(Error::new(ErrorKind::Immovable(
                        self.thing(thing).name.clone(),
                    )));
                }
                self.things[index].kind = if is_prop {
                    ThingKind::Prop
                } else {
                    ThingKind::Item
                };
            }
        }
        Ok(())
    }

    /// Reads a room attribute in the textual form accepted by
    /// [`World::set_room_attribute`].
    #[must_use]
    pub fn room_attribute(&self, room: RoomId, attribute: RoomAttribute) -> String {
        let record = self.room(room);
        match attribute {
            RoomAttribute::Identifier => record.identifier.clone(),
            RoomAttribute::Name => record.name.clone(),
            RoomAttribute::EntryDesc => record.entry_desc.clone(),
            RoomAttribute::ExamineDesc => record.examine_desc.clone(),
            RoomAttribute::Holding => record
                .holding
                .iter()
                .map(|&thing| self.thing_label(thing))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    /// Reads a thing attribute in the textual form accepted by
    /// [`World::set_thing_attribute`].
    #[must_use]
    pub fn thing_attribute(&self, thing: ThingId, attribute: ThingAttribute) -> String {
        let record = self.thing(thing);
        match attribute {
            ThingAttribute::Alias => record.alias.clone(),
            ThingAttribute::Name => record.name.clone(),
            ThingAttribute::GroundDesc => record.ground_desc.clone(),
            ThingAttribute::ExamineDesc => record.examine_desc.clone(),
            ThingAttribute::Prop => record.is_prop().to_string(),
        }
    }
}

fn build_thing(id: ThingId, key: &str, info: &ThingInfo) -> Thing {
    let alias = if info.alias.trim().is_empty() {
        key.to_lowercase()
    } else {
        info.alias.trim().to_lowercase()
    };
    let mut thing = Thing::new(id, alias);
    thing.name = if info.name.is_empty() {
        key.to_string()
    } else {
        info.name.clone()
    };
    thing.ground_desc.clone_from(&info.ground_desc);
    thing.examine_desc.clone_from(&info.examine_desc);
    thing.kind = if info.is_prop {
        ThingKind::Prop
    } else {
        ThingKind::Item
    };
    thing.actions = info
        .actions
        .iter()
        .map(|(verb, lines)| (verb.clone(), lines.iter().cloned().collect::<Vector<String>>()))
        .collect();
    thing
}

fn build_room(id: RoomId, key: &str, info: &RoomInfo) -> Room {
    let identifier = if info.iden.trim().is_empty() {
        key
    } else {
        info.iden.trim()
    };
    let mut room = Room::new(id, identifier);
    room.name = if info.name.is_empty() {
        identifier.to_string()
    } else {
        info.name.clone()
    };
    room.entry_desc.clone_from(&info.desc);
    room.examine_desc.clone_from(&info.exam);
    room
}

fn too_many(what: &str) -> Error {
    Error::invalid_content(format!("too many {what}"))
}
