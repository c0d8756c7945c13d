//! Rooms, things, inventory, and world state for Architect.
//!
//! This crate provides:
//! - [`Room`] / [`Thing`] - Arena records for locations and objects
//! - [`Inventory`] - The player's holdings, optionally split into bags
//! - [`World`] - Persistent world state with O(1) snapshots
//! - [`Content`] - Raw room, thing, and action records fed in by a loader

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribute;
pub mod info;
pub mod inventory;
pub mod room;
pub mod thing;
pub mod world;

pub use attribute::{BagAttribute, RoomAttribute, ThingAttribute};
pub use info::{ActionInfo, Content, RoomInfo, ThingInfo};
pub use inventory::{Bag, Inventory};
pub use room::Room;
pub use thing::{Thing, ThingKind};
pub use world::{Container, World};
