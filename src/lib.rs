//! Architect - Blueprint-driven text adventure engine
//!
//! This crate re-exports all layers of the Architect system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: architect_runtime    - Session, REPL, CLI, demo world
//! Layer 3: architect_parser     - Player commands, action engine
//! Layer 2: architect_language   - Blueprint instructions, alias resolution, interpreter
//! Layer 1: architect_storage    - Rooms, things, inventory, world state
//! Layer 0: architect_foundation - Core types (RoomId, ThingId, Direction, Error)
//! ```

pub use architect_foundation as foundation;
pub use architect_language as language;
pub use architect_parser as parser;
pub use architect_runtime as runtime;
pub use architect_storage as storage;
