//! Game session, REPL, and CLI for Architect.
//!
//! This crate provides:
//! - [`Session`] - One running game: world, output buffers, and action engine
//! - [`Repl`] - Interactive read-eval-print loop over a [`LineEditor`]
//! - [`GameConfig`] - Start room, interpreter policy, and REPL switches
//! - [`demo_content`] - The built-in demo world

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod demo;
pub mod editor;
pub mod repl;
pub mod session;

pub use config::{DEFAULT_START_ROOM, GameConfig};
pub use demo::demo_content;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
