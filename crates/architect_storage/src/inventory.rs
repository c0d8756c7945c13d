//! The player's inventory.
//!
//! Things are either loose in the inventory or inside exactly one named bag.

use architect_foundation::{Error, ErrorKind, Result, ThingId};
use im::{OrdMap, Vector};

/// A named sub-collection of the inventory with an optional capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bag {
    /// Bag name.
    pub name: String,
    /// Capacity; `None` is unbounded.
    pub limit: Option<usize>,
    /// Things in the bag.
    pub holding: Vector<ThingId>,
}

impl Bag {
    /// Creates an empty, unbounded bag.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: None,
            holding: Vector::new(),
        }
    }

    /// Returns true if the bag cannot take another thing.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.holding.len() >= limit)
    }
}

/// Things carried by the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    loose: Vector<ThingId>,
    bags: OrdMap<String, Bag>,
}

impl Inventory {
    /// Creates an empty inventory with no bags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the thing is anywhere in the inventory.
    #[must_use]
    pub fn contains(&self, thing: ThingId) -> bool {
        self.loose.contains(&thing) || self.bags.values().any(|bag| bag.holding.contains(&thing))
    }

    /// Returns the name of the bag holding the thing, if it is in one.
    #[must_use]
    pub fn bag_of(&self, thing: ThingId) -> Option<&str> {
        self.bags
            .values()
            .find(|bag| bag.holding.contains(&thing))
            .map(|bag| bag.name.as_str())
    }

    /// Adds a thing loose or into the named bag.
    ///
    /// Adding a thing that is already in the inventory is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the bag does not exist or is full.
    pub fn add(&mut self, thing: ThingId, bag: Option<&str>) -> Result<()> {
        if self.contains(thing) {
            return Ok(());
        }
        match bag {
            None => self.loose.push_back(thing),
            Some(name) => {
                let bag = self
                    .bags
                    .get_mut(name)
                    .ok_or_else(|| Error::capability(format!("bag `{name}`"), "existing bag"))?;
                if let Some(limit) = bag.limit.filter(|_| bag.is_full()) {
                    return Err(Error::new(ErrorKind::BagFull {
                        bag: bag.name.clone(),
                        limit,
                    }));
                }
                bag.holding.push_back(thing);
            }
        }
        Ok(())
    }

    /// Removes a thing from wherever it is in the inventory.
    ///
    /// Returns whether the thing was present.
    pub fn remove(&mut self, thing: ThingId) -> bool {
        if let Some(position) = self.loose.index_of(&thing) {
            self.loose.remove(position);
            return true;
        }
        let Some(name) = self.bag_of(thing).map(str::to_string) else {
            return false;
        };
        if let Some(bag) = self.bags.get_mut(&name) {
            if let Some(position) = bag.holding.index_of(&thing) {
                bag.holding.remove(position);
                return true;
            }
        }
        false
    }

    /// Creates the bag if needed and sets its capacity.
    pub fn set_limit(&mut self, name: &str, limit: Option<usize>) {
        if !self.bags.contains_key(name) {
            self.bags.insert(name.to_string(), Bag::new(name));
        }
        if let Some(bag) = self.bags.get_mut(name) {
            bag.limit = limit;
        }
    }

    /// Returns the named bag.
    #[must_use]
    pub fn bag(&self, name: &str) -> Option<&Bag> {
        self.bags.get(name)
    }

    /// Returns all bags in name order.
    pub fn bags(&self) -> impl Iterator<Item = &Bag> {
        self.bags.values()
    }

    /// Returns the things not in any bag.
    pub fn loose(&self) -> impl Iterator<Item = ThingId> + '_ {
        self.loose.iter().copied()
    }

    /// Returns every carried thing, loose ones first.
    pub fn items(&self) -> impl Iterator<Item = ThingId> + '_ {
        self.loose
            .iter()
            .chain(self.bags.values().flat_map(|bag| bag.holding.iter()))
            .copied()
    }

    /// Returns the number of carried things.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loose.len() + self.bags.values().map(|bag| bag.holding.len()).sum::<usize>()
    }

    /// Returns true if nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
