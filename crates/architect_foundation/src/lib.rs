//! Core identifiers, directions, and error types for Architect.
//!
//! This crate provides:
//! - [`RoomId`] / [`ThingId`] - Arena identifiers for rooms and things
//! - [`Direction`] - The four cardinal directions and their link slots
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod ids;

pub use direction::Direction;
pub use error::{Error, ErrorContext, ErrorKind, SemanticLimit};
pub use ids::{RoomId, ThingId};

/// Result type for Architect operations.
pub type Result<T> = std::result::Result<T, Error>;
