//! Player command parsing and the action engine for Architect.
//!
//! This crate turns a line of player input like "read the note" into
//! Blueprint instructions and runs them.
//!
//! # Architecture
//!
//! ```text
//! "read the note"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["read", "the", "note"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Act { verb: "read", args: ["note"] }
//! │ CLASSIFICATION  │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARGUMENT        │  → note-thing (or "That thing cannot be found.")
//! │ RESOLUTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TEMPLATE        │  → ["sys_!It reads: {0.exam}"] → ["sys_!It reads: ..."]
//! │ EXPANSION       │
//! └─────────────────┘
//!          │
//!          ▼
//!     Interpreter
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`command`] - Classify input as movement, menu, or action commands
//! - [`action`] - Verb records and the action registry
//! - [`template`] - Placeholder expansion for instruction templates
//! - [`messages`] - Fixed player-facing texts
//! - [`engine`] - Argument resolution and execution of actions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod command;
pub mod engine;
pub mod messages;
pub mod template;
pub mod tokenizer;

pub use action::{Action, ActionRegistry, TAKE};
pub use command::Command;
pub use engine::{ActionEngine, ActionOutcome};
pub use messages::Refusal;
pub use template::interpolate;
pub use tokenizer::{InputToken, InputTokenizer};
