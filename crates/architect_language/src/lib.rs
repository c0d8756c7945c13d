//! Blueprint instruction parsing, alias resolution, and interpreter for Architect.
//!
//! A Blueprint line has the shape `<type:3><sep><target><functional-char><params>`,
//! for example `rom__+key` (put the key in the current room) or
//! `ift_key@$>sys_!You have it.<sys_!You don't.`.
//!
//! This crate provides:
//! - [`Instruction`] - Decomposition of one line into its four parts
//! - [`AliasResolver`] - The mapping from `_`, `$`, and names to entities
//! - [`Conditional`] - The `ift` branch grammar
//! - [`Interpreter`] - Dispatch to the per-type handlers, with rollback on error
//! - [`Output`] - The setting and action-log accumulators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alias;
pub mod conditional;
pub mod config;
pub mod instruction;
pub mod interpreter;
pub mod link;
pub mod output;
pub mod token;


pub use alias::{AliasResolver, Entity};
pub use conditional::{Comparator, Conditional};
pub use config::InterpreterConfig;
pub use instruction::{Instruction, PASS};
pub use interpreter::Interpreter;
pub use link::link;
pub use output::Output;
pub use token::{FunctionalChar, TypeCode};
